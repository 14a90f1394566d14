//! Scene entity - a static node in the story graph.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::SceneId;

/// Every scene offers exactly this many choices, labeled A through D.
pub const CHOICES_PER_SCENE: usize = 4;

/// Positional label of a choice: index 0 is "A", 1 is "B", and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChoiceLabel {
    A,
    B,
    C,
    D,
}

impl ChoiceLabel {
    pub const ALL: [ChoiceLabel; CHOICES_PER_SCENE] =
        [ChoiceLabel::A, ChoiceLabel::B, ChoiceLabel::C, ChoiceLabel::D];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            ChoiceLabel::A => 0,
            ChoiceLabel::B => 1,
            ChoiceLabel::C => 2,
            ChoiceLabel::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChoiceLabel::A => "A",
            ChoiceLabel::B => "B",
            ChoiceLabel::C => "C",
            ChoiceLabel::D => "D",
        }
    }
}

impl fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scene: description, retrieval query, four labeled choices and the
/// transition table that routes each choice to the next scene.
///
/// Serialized with the field names the game client already understands
/// (`scene_id`, `rag_context_query`, `actions`, `next_scene_map`).
/// Deserialization runs the same validation as [`Scene::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SceneRecord")]
pub struct Scene {
    #[serde(rename = "scene_id")]
    id: SceneId,
    description: String,
    #[serde(rename = "rag_context_query")]
    retrieval_query: String,
    region: Option<String>,
    #[serde(rename = "actions")]
    choices: Vec<String>,
    #[serde(rename = "next_scene_map")]
    transitions: BTreeMap<ChoiceLabel, SceneId>,
}

impl Scene {
    /// Create a scene.
    ///
    /// Fails with [`DomainError::Validation`] unless there are exactly four
    /// choices and a transition for each of the labels A-D.
    pub fn new(
        id: impl Into<SceneId>,
        description: impl Into<String>,
        retrieval_query: impl Into<String>,
        region: Option<String>,
        choices: Vec<String>,
        transitions: BTreeMap<ChoiceLabel, SceneId>,
    ) -> Result<Self, DomainError> {
        let id = id.into();

        if choices.len() != CHOICES_PER_SCENE {
            return Err(DomainError::validation(format!(
                "scene {} has {} choices, expected {}",
                id,
                choices.len(),
                CHOICES_PER_SCENE
            )));
        }

        if let Some(missing) = ChoiceLabel::ALL
            .iter()
            .find(|label| !transitions.contains_key(label))
        {
            return Err(DomainError::validation(format!(
                "scene {} has no transition for choice {}",
                id, missing
            )));
        }

        Ok(Self {
            id,
            description: description.into(),
            retrieval_query: retrieval_query.into(),
            region,
            choices,
            transitions,
        })
    }

    pub fn id(&self) -> &SceneId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn retrieval_query(&self) -> &str {
        &self.retrieval_query
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Text of the choice at `index`.
    pub fn choice(&self, index: usize) -> Result<&str, DomainError> {
        self.choices
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| self.invalid_choice(index))
    }

    /// Scene the choice at `index` leads to.
    pub fn next_scene(&self, index: usize) -> Result<&SceneId, DomainError> {
        if index >= self.choices.len() {
            return Err(self.invalid_choice(index));
        }
        ChoiceLabel::from_index(index)
            .and_then(|label| self.transitions.get(&label))
            .ok_or_else(|| self.invalid_choice(index))
    }

    /// Validates a client-supplied index, which may be negative.
    pub fn choice_index(&self, raw: i64) -> Result<usize, DomainError> {
        usize::try_from(raw)
            .ok()
            .filter(|index| *index < self.choices.len())
            .ok_or_else(|| DomainError::invalid_choice(self.id.as_str(), raw, self.choices.len()))
    }

    /// All transition targets in label order.
    pub fn transition_targets(&self) -> impl Iterator<Item = (ChoiceLabel, &SceneId)> {
        self.transitions.iter().map(|(label, target)| (*label, target))
    }

    fn invalid_choice(&self, index: usize) -> DomainError {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        DomainError::invalid_choice(self.id.as_str(), index, self.choices.len())
    }
}

/// Raw serde shape, validated into a [`Scene`].
#[derive(Deserialize)]
struct SceneRecord {
    scene_id: SceneId,
    description: String,
    rag_context_query: String,
    #[serde(default)]
    region: Option<String>,
    actions: Vec<String>,
    next_scene_map: BTreeMap<ChoiceLabel, SceneId>,
}

impl TryFrom<SceneRecord> for Scene {
    type Error = DomainError;

    fn try_from(record: SceneRecord) -> Result<Self, Self::Error> {
        Scene::new(
            record.scene_id,
            record.description,
            record.rag_context_query,
            record.region,
            record.actions,
            record.next_scene_map,
        )
    }
}
