/// JSON file implementation of the habit storage interface
/// 
/// The data file is a pretty-printed JSON array with four-space indentation,
/// one object per habit.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::TrackerConfig;
use crate::storage::{HabitRecord, HabitStorage, StorageError};

/// Flat-file storage for the full habit snapshot
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create storage backed by the given file; nothing is read until `load_records`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    
    /// Create storage for the data file named in the configuration
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.data_file.clone())
    }
    
    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HabitStorage for JsonStorage {
    fn load_records(&self) -> Result<Vec<HabitRecord>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::MissingFile {
                    path: self.path.display().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        
        let records: Vec<HabitRecord> = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} habit records from {}", records.len(), self.path.display());
        Ok(records)
    }
    
    fn save_records(&self, records: &[HabitRecord]) -> Result<(), StorageError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut serializer)?;
        
        std::fs::write(&self.path, buf)?;
        tracing::info!("Saved {} habits to {}", records.len(), self.path.display());
        Ok(())
    }
}
