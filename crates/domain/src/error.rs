//! Unified error types for the domain layer
//!
//! Provides a common error type for scene lookups, choice validation and
//! content validation, so the engine can map failures to HTTP statuses
//! without inspecting strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a scene without four choices)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Choice index outside the scene's choice list
    #[error("Invalid choice {index} for scene {scene_id}: expected 0..{available}")]
    InvalidChoice {
        scene_id: String,
        index: i64,
        available: usize,
    },
}

impl DomainError {
    /// Creates a validation error for content that breaks a story invariant.
    ///
    /// # Example
    /// ```ignore
    /// if scene.choices().len() != 4 {
    ///     return Err(DomainError::validation("scenes need exactly four choices"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid choice error
    pub fn invalid_choice(scene_id: impl Into<String>, index: i64, available: usize) -> Self {
        Self::InvalidChoice {
            scene_id: scene_id.into(),
            index,
            available,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, Self::InvalidChoice { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("scene has no choices");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: scene has no choices");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Scene", "nonexistent");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Scene not found: nonexistent");
    }

    #[test]
    fn test_invalid_choice_error() {
        let err = DomainError::invalid_choice("intro", 5, 4);
        assert!(err.is_invalid_choice());
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Invalid choice 5 for scene intro: expected 0..4"
        );
    }
}
