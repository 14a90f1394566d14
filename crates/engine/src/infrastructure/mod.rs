//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus
//! configuration and content loading.

pub mod clock;
pub mod config;
pub mod loader;
pub mod ollama;
pub mod ports;
pub mod replicate;
pub mod sesame;
