/// Storage layer for persisting habit data
/// 
/// This module handles the flat-file representation of the tracker. Habits
/// are stored as a whole-snapshot JSON array of `HabitRecord`s: loaded once
/// at start, overwritten in full on save.

pub mod json;

// Re-export the main storage types
pub use json::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::domain::{format_timestamp, parse_timestamp, DomainError, Habit};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("No existing data file found at '{path}'")]
    MissingFile { path: String },
    
    #[error("Failed to read/write data file: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Error decoding JSON from the data file: {0}")]
    Serialization(#[from] serde_json::Error),
    
    #[error("Invalid habit record: {0}")]
    Domain(#[from] DomainError),
}

/// One habit exactly as it appears in the data file
/// 
/// Fields stay as raw strings so the read-only analytics can work on a file
/// without the validation the tracker applies when loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub name: String,
    pub periodicity: String,
    /// ISO-8601 creation instant
    pub creation_date: String,
    /// ISO-8601 completion instants, in recorded order
    #[serde(default)]
    pub completions: Vec<String>,
}

impl From<&Habit> for HabitRecord {
    fn from(habit: &Habit) -> Self {
        Self {
            name: habit.name.clone(),
            periodicity: habit.periodicity.to_string(),
            creation_date: format_timestamp(&habit.created_at),
            completions: habit.completions.iter().map(format_timestamp).collect(),
        }
    }
}

impl TryFrom<HabitRecord> for Habit {
    type Error = DomainError;

    fn try_from(record: HabitRecord) -> Result<Self, Self::Error> {
        let periodicity = record.periodicity.parse()?;
        let created_at = parse_timestamp(&record.creation_date)?;
        let completions = record
            .completions
            .iter()
            .map(|c| parse_timestamp(c))
            .collect::<Result<Vec<_>, _>>()?;
        
        Ok(Habit::from_existing(record.name, periodicity, created_at, completions))
    }
}

/// Trait defining the storage interface for habit snapshots
/// 
/// This trait lets the tracker and the menu session run against the JSON file
/// in production and against in-memory doubles in tests.
pub trait HabitStorage {
    /// Read every stored record, reporting why the snapshot is unusable
    fn load_records(&self) -> Result<Vec<HabitRecord>, StorageError>;
    
    /// Replace the stored snapshot with the given records
    fn save_records(&self, records: &[HabitRecord]) -> Result<(), StorageError>;
    
    /// Read every stored record, recovering to an empty list on any failure
    fn load_records_or_empty(&self) -> Vec<HabitRecord> {
        match self.load_records() {
            Ok(records) => records,
            Err(e @ StorageError::MissingFile { .. }) => {
                tracing::info!("{}. Starting with an empty tracker.", e);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("{}. Starting with an empty tracker.", e);
                Vec::new()
            }
        }
    }
}
