//! Narration use cases.
//!
//! Each wraps one generative collaborator behind a timeout and never fails:
//! on any collaborator failure it logs and returns a canned fallback.

mod companion;
mod illustration;
mod voice;

pub use companion::{fallback_reaction, ReactToChoice, ReactionContext};
pub use illustration::{IllustrateScene, FALLBACK_IMAGE_URL};
pub use voice::{SpeakLine, FALLBACK_AUDIO_URL};
