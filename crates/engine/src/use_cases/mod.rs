//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules and collaborator ports.

pub mod narration;
pub mod player_action;
pub mod scene;
pub mod scoring;
pub mod session;

pub use player_action::PlayerActionUseCases;
pub use scene::SceneUseCases;
pub use session::SessionUseCases;
