//! RPG Maestro Shared - wire types for the engine's HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde, uuid and the domain vocabulary
//! 2. **No business logic** - pure data types and serialization
//! 3. **Client-compatible field names** - the game client reads `scene_id`,
//!    `choices`, `image_url`, `agent_response`, `audio_url`, `next_scene_id`

pub mod requests;
pub mod responses;

pub use requests::ActionRequest;
pub use responses::{
    ActionResponse, ErrorCode, ErrorResponse, ObjectivesResponse, SceneResponse, SessionResponse,
    WelcomeResponse,
};
