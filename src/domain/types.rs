/// Core types used throughout the domain layer
/// 
/// This module defines Periodicity and the timestamp representation shared by
/// habits, the streak engine, and the JSON data file.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, SubsecRound, Timelike};

use crate::domain::DomainError;

/// A completion or creation instant, in local wall-clock time
pub type Timestamp = NaiveDateTime;

/// How often a habit should be performed
/// 
/// The periodicity decides which gap between two completions still
/// counts as "consecutive" when streaks are calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Periodicity {
    /// Once every day
    Daily,
    /// Once every week
    Weekly,
}

impl Periodicity {
    /// All recognized periodicities, in menu order
    pub const ALL: [Periodicity; 2] = [Periodicity::Daily, Periodicity::Weekly];

    /// The lowercase name used in the data file and in user input
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }
    
    /// Length of one full period
    pub fn period(&self) -> Duration {
        match self {
            Periodicity::Daily => Duration::days(1),
            Periodicity::Weekly => Duration::weeks(1),
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            _ => Err(DomainError::UnsupportedPeriodicity(s.to_string())),
        }
    }
}

/// Current local time at microsecond precision
/// 
/// Microseconds are the finest unit the data file keeps, so truncating here
/// means a save/load cycle gives back exactly the same instant.
pub fn now() -> Timestamp {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Render a timestamp as ISO-8601 (`2024-03-01T07:30:00.125000`)
/// 
/// The fractional part is left out entirely when it is zero.
pub fn format_timestamp(ts: &Timestamp) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Render a timestamp for display (`2024-03-01 07:30:00.125000`)
/// 
/// Same layout as `format_timestamp` with a space instead of `T`.
pub fn display_timestamp(ts: &Timestamp) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

/// Parse an ISO-8601 timestamp as written by `format_timestamp`
/// 
/// Also accepts a space instead of `T`, an RFC 3339 offset (the wall-clock
/// part is kept), and a bare date, which is read as midnight.
pub fn parse_timestamp(s: &str) -> Result<Timestamp, DomainError> {
    let trimmed = s.trim();
    
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(ts);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.naive_local());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DomainError::InvalidTimestamp(s.to_string()))
}
