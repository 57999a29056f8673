/// Domain module containing the core data types
/// 
/// This module defines the Habit and completion payload types, the known
/// period names, and the id/timestamp helpers used when habits are stored.

pub mod habit;
pub mod completion;
pub mod period;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use completion::*;
pub use period::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },
    
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

impl DomainError {
    pub(crate) fn validation(field: &str, message: &str) -> Self {
        DomainError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
