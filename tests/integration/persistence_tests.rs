/// Persistence round-trips and recovery from bad data files
use chrono::{Duration, NaiveDate};
use habit_tracker::*;
use tempfile::TempDir;

fn storage_in(dir: &TempDir) -> JsonStorage {
    JsonStorage::new(dir.path().join("habits.json"))
}

fn at(day: u32, micros: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_micro_opt(6, 45, 0, micros)
        .unwrap()
}

#[test]
fn test_round_trip_preserves_every_field() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = storage_in(&dir);

    let mut tracker = HabitTracker::new();
    tracker.add_habit("Read", "daily").unwrap();
    tracker.add_habit("Read", "weekly").unwrap();
    tracker.add_habit("Clean", "weekly").unwrap();
    tracker.complete_habit_at("Read", at(5, 0)).unwrap();
    tracker.complete_habit_at("Read", at(2, 123_456)).unwrap();
    tracker.complete_habit_at("Read", at(9, 1)).unwrap();
    tracker.complete_habit_at("Clean", at(1, 0) + Duration::hours(3)).unwrap();
    tracker.complete_habit("Clean").unwrap();

    tracker.save_to(&storage).expect("Failed to save");
    let restored = HabitTracker::load_from(&storage);

    assert_eq!(restored, tracker);
    assert_eq!(
        restored.habits()[0].completion_history(),
        &[at(5, 0), at(2, 123_456), at(9, 1)]
    );
}

#[test]
fn test_missing_file_loads_empty_tracker() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = HabitTracker::load_from(&storage_in(&dir));
    assert!(tracker.is_empty());
}

#[test]
fn test_malformed_file_loads_empty_tracker() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = storage_in(&dir);

    for content in ["", "not json", "{\"name\": \"Read\"}", "[{\"name\": 1}]"] {
        std::fs::write(storage.path(), content).unwrap();
        assert!(HabitTracker::load_from(&storage).is_empty(), "content {:?}", content);
    }
}

#[test]
fn test_bad_record_values_load_empty_tracker() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = storage_in(&dir);
    std::fs::write(
        storage.path(),
        r#"[
    {"name": "Read", "periodicity": "daily", "creation_date": "2024-01-01T08:00:00", "completions": []},
    {"name": "Swim", "periodicity": "monthly", "creation_date": "2024-01-01T08:00:00", "completions": []}
]"#,
    )
    .unwrap();

    assert!(HabitTracker::load_from(&storage).is_empty());
    // The raw analytics still see both records
    let records = storage.load_records_or_empty();
    assert_eq!(analytics::all_habit_names(&records), vec!["Read", "Swim"]);
}

#[test]
fn test_reads_files_written_with_naive_iso_timestamps() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = storage_in(&dir);
    std::fs::write(
        storage.path(),
        r#"[
    {
        "name": "Exercise",
        "periodicity": "daily",
        "creation_date": "2024-03-01T06:45:00.000001",
        "completions": [
            "2024-03-01T06:45:00",
            "2024-03-02T06:45:00",
            "2024-03-02T18:00:00.250000"
        ]
    }
]"#,
    )
    .unwrap();

    let tracker = HabitTracker::load_from(&storage);
    let habit = tracker.get_habit("Exercise").expect("Habit missing");
    assert_eq!(habit.created_at, at(1, 1));
    assert_eq!(habit.completion_history()[1], at(2, 0));
    assert_eq!(habit.streak(), 3);

    let records = storage.load_records().unwrap();
    assert_eq!(analytics::streak_for_habit(&records, "exercise").unwrap(), 1);
}
