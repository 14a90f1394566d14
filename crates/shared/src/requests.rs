//! Request bodies accepted by the engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub scene_id: String,
    /// Signed so that a negative index is reported as an invalid choice
    /// rather than a malformed body.
    pub choice_index: i64,
    /// Session to apply the choice to. When absent a new session is created
    /// and its id is returned in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}
