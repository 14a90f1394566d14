//! Immutable story content: historical documents and scenes.

mod document;
mod scene;

pub use document::{Document, DocumentField};
pub use scene::{ChoiceLabel, Scene, CHOICES_PER_SCENE};
