/// Read-only analytics over raw habit records
/// 
/// These functions work directly on the records loaded from the data file,
/// independent of the live tracker. Streaks here are counted with
/// `StreakVariant::NewestFirst`.

use crate::domain::{compute_streak, parse_timestamp, DomainError, Periodicity, StreakVariant};
use crate::storage::HabitRecord;

/// Names of every record, in file order
pub fn all_habit_names(records: &[HabitRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

/// Records whose stored periodicity equals the given name
/// 
/// The argument is trimmed and lowercased; the stored value must match it
/// exactly. An unknown name simply matches nothing.
pub fn habits_by_periodicity<'a>(records: &'a [HabitRecord], periodicity: &str) -> Vec<&'a HabitRecord> {
    let wanted = periodicity.trim().to_lowercase();
    records
        .iter()
        .filter(|record| record.periodicity == wanted)
        .collect()
}

/// Streak of raw ISO-8601 completions under a raw periodicity name
pub fn calculate_streak<S: AsRef<str>>(completions: &[S], periodicity: &str) -> Result<u32, DomainError> {
    let periodicity: Periodicity = periodicity.parse()?;
    let completions = completions
        .iter()
        .map(|c| parse_timestamp(c.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    
    Ok(compute_streak(&completions, periodicity, StreakVariant::NewestFirst))
}

/// Longest streak across all records, or 0 when there are none
pub fn longest_streak(records: &[HabitRecord]) -> Result<u32, DomainError> {
    let mut longest = 0;
    for record in records {
        longest = longest.max(calculate_streak(record.completions.as_slice(), &record.periodicity)?);
    }
    Ok(longest)
}

/// Streak of the first record whose name matches, ignoring case
/// 
/// Returns 0 when no record matches.
pub fn streak_for_habit(records: &[HabitRecord], name: &str) -> Result<u32, DomainError> {
    let wanted = name.to_lowercase();
    match records.iter().find(|record| record.name.to_lowercase() == wanted) {
        Some(record) => calculate_streak(record.completions.as_slice(), &record.periodicity),
        None => Ok(0),
    }
}
