use serde::{Deserialize, Serialize};

/// Fixed deltas a (scene, choice) pair applies to alignment and trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChoiceImpact {
    pub law_chaos_delta: i32,
    pub good_evil_delta: i32,
    pub trust_delta: i32,
}

impl ChoiceImpact {
    pub const fn new(law_chaos_delta: i32, good_evil_delta: i32, trust_delta: i32) -> Self {
        Self {
            law_chaos_delta,
            good_evil_delta,
            trust_delta,
        }
    }
}
