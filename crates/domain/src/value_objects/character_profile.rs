use serde::{Deserialize, Serialize};

/// Persona of the companion NPC who reacts to the player's choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    pub alignment: String,
    pub background: String,
}

impl CharacterProfile {
    pub fn new(
        name: impl Into<String>,
        alignment: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            alignment: alignment.into(),
            background: background.into(),
        }
    }
}

impl Default for CharacterProfile {
    fn default() -> Self {
        Self::new(
            "Ser Elyen",
            "Neutral Good",
            "A fallen knight seeking redemption",
        )
    }
}
