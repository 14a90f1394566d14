//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - LLM calls (could swap Ollama -> Claude/OpenAI)
//! - Image generation (could swap Replicate -> ComfyUI)
//! - Speech synthesis (could swap Sesame -> other TTS)
//! - Clock (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ChatMessage, FinishReason, ImageGenPort, ImageRequest, ImageResult, LlmPort, LlmRequest,
    LlmResponse, MessageRole, SpeechRequest, SpeechResult, VoicePort,
};

#[cfg(test)]
pub use external::{MockImageGenPort, MockLlmPort, MockVoicePort};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{CollaboratorFailure, ImageGenError, LlmError, VoiceError};
