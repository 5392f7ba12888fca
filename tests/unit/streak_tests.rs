/// Streak engine behavior through the public API
use chrono::{Duration, NaiveDate};
use habit_tracker::analytics;
use habit_tracker::*;

fn t0() -> Timestamp {
    NaiveDate::from_ymd_opt(2024, 6, 10)
        .unwrap()
        .and_hms_opt(21, 15, 0)
        .unwrap()
}

fn spaced(gaps: &[Duration]) -> Vec<Timestamp> {
    let mut at = t0();
    let mut out = vec![at];
    for gap in gaps {
        at = at + *gap;
        out.push(at);
    }
    out
}

#[test]
fn test_tracker_and_file_streaks_diverge_on_same_day_completions() {
    let completions = spaced(&[Duration::minutes(90), Duration::minutes(90)]);

    let mut habit = Habit::new("Water".to_string(), Periodicity::Daily).unwrap();
    for at in &completions {
        habit.complete_at(*at);
    }
    assert_eq!(habit.streak(), 3);

    let raw: Vec<String> = completions.iter().map(format_timestamp).collect();
    assert_eq!(analytics::calculate_streak(raw.as_slice(), "daily").unwrap(), 1);
}

#[test]
fn test_thirty_hour_gap_under_each_daily_variant() {
    let completions = spaced(&[Duration::hours(30)]);

    assert_eq!(
        compute_streak(&completions, Periodicity::Daily, StreakVariant::OldestFirst),
        1
    );
    // 30 hours is one whole day
    assert_eq!(
        compute_streak(&completions, Periodicity::Daily, StreakVariant::NewestFirst),
        2
    );
}

#[test]
fn test_weekly_variants_at_seven_days_and_a_bit() {
    let completions = spaced(&[Duration::days(7) + Duration::hours(2)]);

    assert_eq!(
        compute_streak(&completions, Periodicity::Weekly, StreakVariant::OldestFirst),
        1
    );
    assert_eq!(
        compute_streak(&completions, Periodicity::Weekly, StreakVariant::NewestFirst),
        2
    );
}

#[test]
fn test_unsorted_input_is_ordered_before_walking() {
    let mut completions = spaced(&[Duration::days(1), Duration::days(1), Duration::days(1)]);
    completions.reverse();
    completions.swap(0, 2);

    for variant in [StreakVariant::NewestFirst, StreakVariant::OldestFirst] {
        assert_eq!(compute_streak(&completions, Periodicity::Daily, variant), 4);
    }
}

#[test]
fn test_duplicate_instants() {
    let completions = vec![t0(), t0()];

    assert_eq!(
        compute_streak(&completions, Periodicity::Weekly, StreakVariant::OldestFirst),
        2
    );
    assert_eq!(
        compute_streak(&completions, Periodicity::Weekly, StreakVariant::NewestFirst),
        1
    );
}
