/// Domain module containing core business logic and data types
/// 
/// This module defines the core entities (Habit, Periodicity) and the streak
/// engine that walks a habit's completion history. These types represent the
/// fundamental concepts in our habit tracking system.

pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },
    
    #[error("Habit with name '{0}' not found")]
    NotFound(String),
    
    #[error("Unsupported periodicity: '{0}'")]
    UnsupportedPeriodicity(String),
    
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl DomainError {
    /// Shorthand for building a validation error from a message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }
}
