//! Error types for port operations.

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageGenError {
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Generation timed out")]
    TimedOut,
    #[error("Service unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VoiceError {
    #[error("Speech request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Failed to store audio: {0}")]
    Storage(String),
    #[error("Service unavailable")]
    Unavailable,
}

/// Common failure shape of every generative collaborator.
///
/// Use cases only ever see this type; each one recovers from it with a
/// canned fallback and logs the failure at `warn`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorFailure {
    #[error("collaborator unavailable")]
    Unavailable,
    #[error("collaborator timed out")]
    TimedOut,
    #[error("collaborator request failed: {0}")]
    RequestFailed(String),
    #[error("collaborator returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl From<LlmError> for CollaboratorFailure {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::RequestFailed(msg) => Self::RequestFailed(msg),
            LlmError::InvalidResponse(msg) => Self::InvalidResponse(msg),
        }
    }
}

impl From<ImageGenError> for CollaboratorFailure {
    fn from(e: ImageGenError) -> Self {
        match e {
            ImageGenError::GenerationFailed(msg) => Self::RequestFailed(msg),
            ImageGenError::InvalidResponse(msg) => Self::InvalidResponse(msg),
            ImageGenError::TimedOut => Self::TimedOut,
            ImageGenError::Unavailable => Self::Unavailable,
        }
    }
}

impl From<VoiceError> for CollaboratorFailure {
    fn from(e: VoiceError) -> Self {
        match e {
            VoiceError::RequestFailed(msg) | VoiceError::Storage(msg) => Self::RequestFailed(msg),
            VoiceError::InvalidResponse(msg) => Self::InvalidResponse(msg),
            VoiceError::Unavailable => Self::Unavailable,
        }
    }
}
