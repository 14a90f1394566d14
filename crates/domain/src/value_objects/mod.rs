//! Value objects: bounded counters, derived moods, impacts and scores.

mod alignment;
mod character_profile;
mod choice_impact;
mod mood;
mod score;
mod trust;

pub use alignment::Alignment;
pub use character_profile::CharacterProfile;
pub use choice_impact::ChoiceImpact;
pub use mood::{Mood, VoiceEmotion};
pub use score::{ChoiceScore, ScoringWeights};
pub use trust::Trust;
