//! Response bodies returned by the engine.

use serde::Serialize;
use uuid::Uuid;

use rpgmaestro_domain::{AgentState, ChoiceScore, Document, PlayerState, Scene};

#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Body of `GET /api/objectives`.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectivesResponse {
    pub objectives: Vec<String>,
    pub description: String,
}

/// Snapshot of one game session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub player_state: PlayerState,
    pub agent_state: AgentState,
}

/// Body of `GET /api/scene/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct SceneResponse {
    pub scene: Scene,
    pub choices: Vec<String>,
    pub image_url: String,
    /// Background documents retrieved for the scene, best match first
    pub historical_context: Vec<Document>,
}

/// Body of `POST /api/action`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub session_id: Uuid,
    pub agent_response: String,
    pub audio_url: String,
    pub next_scene_id: String,
    /// True when `next_scene_id` is an ending rather than a playable scene
    pub is_terminal: bool,
    pub scoring: ChoiceScore,
    pub player_state: PlayerState,
    pub agent_state: AgentState,
}

/// Error classification code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    InvalidChoice,
    SessionNotFound,
    BadRequest,
    Internal,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorCode,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }
}
