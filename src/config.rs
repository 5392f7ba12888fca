/// Runtime configuration for the habit tracker

use std::path::PathBuf;

/// File name used when no data file is given on the command line
pub const DEFAULT_DATA_FILE: &str = "habits.json";

/// Settings shared by the storage adapter and the menu session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// JSON file holding the habit snapshot
    pub data_file: PathBuf,
}

impl TrackerConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self { data_file: data_file.into() }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}
