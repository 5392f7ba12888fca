/// Public library interface for the Habit Tracker
/// 
/// This module exports the habit store, the streak engine, the JSON storage
/// adapter and the interactive menu session, so they can be driven by the
/// binary or by tests.

use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod tracker;
mod menu;
mod config;

pub mod analytics;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitRecord, HabitStorage, JsonStorage, StorageError};
pub use tracker::HabitTracker;
pub use menu::{MenuChoice, Session, MENU};
pub use config::{TrackerConfig, DEFAULT_DATA_FILE};

/// Errors that can surface from a tracker action
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    
    #[error(transparent)]
    Domain(#[from] DomainError),
    
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Session<JsonStorage> {
    /// Open a session over the data file named in the configuration
    pub fn from_config(config: &TrackerConfig) -> Self {
        tracing::info!("Using data file: {}", config.data_file.display());
        Session::open(JsonStorage::from_config(config))
    }
}
