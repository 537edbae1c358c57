//! Error types for fastlog operations.
//!
//! The approximations themselves never fail. These errors are only produced
//! by the checked entry points that validate their inputs up front.

use std::fmt;

/// Errors that can occur during fastlog operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FastLogError {
    /// The input lies outside the domain where the approximation is bounded.
    DomainError {
        /// The rejected input.
        value: f32,
        /// Human-readable error message.
        message: String,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for FastLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastLogError::DomainError { value, message } => {
                write!(f, "Domain error: {} (input: {})", message, value)
            }
            FastLogError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for FastLogError {}

/// Result type alias for fastlog operations.
pub type Result<T> = std::result::Result<T, FastLogError>;

/// Creates a domain error.
pub fn domain_error(value: f32, message: impl Into<String>) -> FastLogError {
    FastLogError::DomainError {
        value,
        message: message.into(),
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> FastLogError {
    FastLogError::ValidationError {
        message: message.into(),
    }
}
