//! RPG Maestro Engine library.
//!
//! This crate contains all server-side code for the RPG Maestro game.
//!
//! ## Structure
//!
//! - `entities/` - Story graph, impact table and document library
//! - `content/` - Built-in scenes and historical documents
//! - `stores/` - In-memory session state
//! - `use_cases/` - User story orchestration across entities
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod content;
pub mod entities;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
