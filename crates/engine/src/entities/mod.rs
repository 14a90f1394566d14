//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps the immutable story content and provides the building
//! blocks for use cases.

pub mod library;
pub mod story;

pub use library::{DocumentLibrary, RetrievalFilters, DEFAULT_RETRIEVAL_LIMIT};
pub use story::{ImpactTable, StoryGraph};
