/// In-memory habit store
/// 
/// Habits live in an ordered vector. Names are not required to be unique;
/// every name-based operation acts on the first habit with that name, and
/// removing a habit keeps the order of the rest.

use crate::domain::{DomainError, Habit, Periodicity, Timestamp};
use crate::storage::{HabitRecord, HabitStorage, StorageError};

/// Ordered collection of habits with first-match name lookups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitTracker {
    habits: Vec<Habit>,
}

impl HabitTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Load the tracker from storage, falling back to an empty tracker
    /// 
    /// A missing file, unparseable JSON, or any record that does not convert
    /// to a valid habit all give an empty tracker. The reason is logged and
    /// never returned.
    pub fn load_from<S: HabitStorage>(storage: &S) -> Self {
        match Self::from_records(storage.load_records_or_empty()) {
            Ok(tracker) => {
                tracing::info!("Loaded {} habits", tracker.habits.len());
                tracker
            }
            Err(e) => {
                tracing::warn!("Invalid habit record in data file: {}. Starting with an empty tracker.", e);
                Self::new()
            }
        }
    }
    
    /// Write the full snapshot to storage
    pub fn save_to<S: HabitStorage>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save_records(&self.to_records())
    }
    
    /// Build a tracker from flat records, keeping their order
    pub fn from_records(records: Vec<HabitRecord>) -> Result<Self, DomainError> {
        let habits = records
            .into_iter()
            .map(Habit::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { habits })
    }
    
    /// Flatten every habit into its persisted form
    pub fn to_records(&self) -> Vec<HabitRecord> {
        self.habits.iter().map(HabitRecord::from).collect()
    }
    
    /// Add a new habit at the end of the list
    /// 
    /// Fails with a validation error, leaving the tracker untouched, when the
    /// name is empty or the periodicity is not `daily` or `weekly`.
    pub fn add_habit(&mut self, name: &str, periodicity: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() || periodicity.trim().is_empty() {
            return Err(DomainError::validation("Name and periodicity must be provided"));
        }
        let periodicity = Self::parse_periodicity(periodicity)?;
        let habit = Habit::new(name.to_string(), periodicity)?;
        
        tracing::debug!("Added habit '{}' ({})", habit.name, habit.periodicity);
        self.habits.push(habit);
        Ok(())
    }
    
    /// Record a completion for the first habit with this name, stamped now
    pub fn complete_habit(&mut self, name: &str) -> Result<(), DomainError> {
        self.find_mut(name)?.complete();
        tracing::debug!("Completed habit '{}'", name);
        Ok(())
    }
    
    /// Record a completion for the first habit with this name at a given instant
    pub fn complete_habit_at(&mut self, name: &str, at: Timestamp) -> Result<(), DomainError> {
        self.find_mut(name)?.complete_at(at);
        Ok(())
    }
    
    /// Remove the first habit with this name and hand it back
    pub fn delete_habit(&mut self, name: &str) -> Result<Habit, DomainError> {
        let index = self.position(name).ok_or_else(|| DomainError::NotFound(name.to_string()))?;
        let removed = self.habits.remove(index);
        tracing::debug!("Deleted habit '{}'", removed.name);
        Ok(removed)
    }
    
    /// Look up the first habit with this name
    pub fn get_habit(&self, name: &str) -> Option<&Habit> {
        self.position(name).map(|index| &self.habits[index])
    }
    
    /// All habits in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }
    
    /// Habits with the given periodicity, in insertion order
    pub fn habits_by_periodicity(&self, periodicity: &str) -> Result<Vec<&Habit>, DomainError> {
        let periodicity = Self::parse_periodicity(periodicity)?;
        Ok(self
            .habits
            .iter()
            .filter(|habit| habit.periodicity == periodicity)
            .collect())
    }
    
    /// Longest streak among all habits, or 0 for an empty tracker
    pub fn longest_streak(&self) -> u32 {
        self.habits.iter().map(Habit::streak).max().unwrap_or(0)
    }
    
    pub fn len(&self) -> usize {
        self.habits.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
    
    fn position(&self, name: &str) -> Option<usize> {
        self.habits.iter().position(|habit| habit.name == name)
    }
    
    fn find_mut(&mut self, name: &str) -> Result<&mut Habit, DomainError> {
        self.habits
            .iter_mut()
            .find(|habit| habit.name == name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }
    
    fn parse_periodicity(periodicity: &str) -> Result<Periodicity, DomainError> {
        periodicity
            .parse()
            .map_err(|_| DomainError::validation("Periodicity must be 'daily' or 'weekly'"))
    }
}
