//! RPG Maestro Domain - story graph, player/agent state and scoring types.
//!
//! Everything in this crate is pure: no I/O, no async, no clocks. The engine
//! crate composes these types into use cases.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{AgentState, PlayerState, RECENT_ACTIONS_CAPACITY};
pub use entities::{ChoiceLabel, Document, DocumentField, Scene, CHOICES_PER_SCENE};
pub use error::DomainError;
pub use ids::{SceneId, SessionId};
pub use value_objects::{
    Alignment, CharacterProfile, ChoiceImpact, ChoiceScore, Mood, ScoringWeights, Trust,
    VoiceEmotion,
};
