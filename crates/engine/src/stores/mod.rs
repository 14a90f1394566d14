//! In-memory state storage modules.
//!
//! Stores manage runtime state that is never persisted:
//! - `SessionStore` - per-player game sessions

pub mod session;

pub use session::{GameSession, SessionStore, SharedSession};
