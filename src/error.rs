//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },
}

impl FintrackError {
    /// Create a duplicate error for transactions
    pub fn duplicate_transaction(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = FintrackError::Validation("amount is negative".into());
        assert_eq!(err.to_string(), "Validation error: amount is negative");
        assert!(err.is_validation());
    }

    #[test]
    fn test_duplicate_transaction() {
        let err = FintrackError::duplicate_transaction("txn-1a2b3c4d");
        assert_eq!(err.to_string(), "Transaction already exists: txn-1a2b3c4d");
        assert!(err.is_duplicate());
        assert!(!err.is_validation());
    }
}
