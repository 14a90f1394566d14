use serde::{Deserialize, Serialize};

/// Companion's trust in the player, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trust(u8);

impl Trust {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const INITIAL: u8 = 50;

    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn adjusted(self, delta: i32) -> Self {
        Self::new((self.0 as i32).saturating_add(delta))
    }
}

impl Default for Trust {
    fn default() -> Self {
        Self(Self::INITIAL)
    }
}
