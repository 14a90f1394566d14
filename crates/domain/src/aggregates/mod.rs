//! Per-session mutable state.
//!
//! Both aggregates expose only invariant-preserving mutators. The engine's
//! state tracker applies them to copies and commits the pair together.

mod agent_state;
mod player_state;

pub use agent_state::{AgentState, RECENT_ACTIONS_CAPACITY};
pub use player_state::{PlayerState, EXPERIENCE_PER_CHOICE};
