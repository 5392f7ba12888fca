/// Habit entity and related functionality
/// 
/// This module defines the core Habit struct that represents a user's habit
/// along with its completion history and name validation.

use crate::domain::{compute_streak, now, DomainError, Periodicity, StreakVariant, Timestamp};

/// A habit represents something the user wants to do regularly
/// 
/// Each habit owns its completion history. Completions are kept in the order
/// they were recorded, which is not necessarily chronological once a history
/// has been loaded from disk or replayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    /// Display name (e.g., "Morning Run"), used for lookups
    pub name: String,
    /// How often this habit should be performed
    pub periodicity: Periodicity,
    /// When this habit was created
    pub created_at: Timestamp,
    /// Every recorded completion, in insertion order
    pub completions: Vec<Timestamp>,
}

impl Habit {
    /// Create a new habit with validation
    pub fn new(name: String, periodicity: Periodicity) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        
        Ok(Self {
            name,
            periodicity,
            created_at: now(),
            completions: Vec::new(),
        })
    }
    
    /// Create a habit from existing data (used when loading from the data file)
    pub fn from_existing(
        name: String,
        periodicity: Periodicity,
        created_at: Timestamp,
        completions: Vec<Timestamp>,
    ) -> Self {
        Self {
            name,
            periodicity,
            created_at,
            completions,
        }
    }
    
    /// Record a completion right now
    pub fn complete(&mut self) {
        self.complete_at(now());
    }
    
    /// Record a completion at the given instant
    pub fn complete_at(&mut self, at: Timestamp) {
        self.completions.push(at);
    }
    
    /// Streak counted forwards from the earliest completion
    pub fn streak(&self) -> u32 {
        compute_streak(&self.completions, self.periodicity, StreakVariant::OldestFirst)
    }
    
    /// All completions, in the order they were recorded
    pub fn completion_history(&self) -> &[Timestamp] {
        &self.completions
    }
    
    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("Habit name cannot be empty"));
        }
        Ok(())
    }
}
