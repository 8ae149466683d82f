//! Contract error types for camp service
//!
//! These errors are transport-agnostic; the REST layer maps them to status codes.

use thiserror::Error;

/// Camp service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampError {
    /// Referenced row does not exist
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource name (Camper, Activity, Signup)
        resource: String,
        /// Requested identifier
        id: i32,
    },
    /// Input rejected before or during a write
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Unexpected storage failure
    #[error("Internal error")]
    Internal,
}

impl CampError {
    pub fn not_found(resource: &str, id: i32) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
