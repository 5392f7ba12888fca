/// Basic integration tests driving a full menu session over a data file
use habit_tracker::*;
use std::io::Cursor;
use tempfile::TempDir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn run(session: &mut Session<JsonStorage>, script: &str) -> String {
        let mut output = Vec::new();
        session
            .run(Cursor::new(script.to_string()), &mut output)
            .expect("Session failed");
        String::from_utf8(output).expect("Output was not UTF-8")
    }

    #[test]
    fn test_session_basic_workflow() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = TrackerConfig::new(temp_dir.path().join("habits.json"));

        let mut session = Session::from_config(&config);
        assert!(session.tracker().is_empty());

        let output = run(
            &mut session,
            "1\nExercise\ndaily\n1\nLaundry\nweekly\n2\nExercise\n5\nweekly\n6\nLaundry\n8\n",
        );
        assert!(output.contains("Habit: Laundry, Streak: 0"));
        assert!(output.contains("Habit 'Laundry' has been deleted."));

        // A new session over the same file sees the saved habits
        let mut reopened = Session::from_config(&config);
        assert_eq!(reopened.tracker().len(), 1);
        let habit = reopened.tracker().get_habit("Exercise").expect("Habit missing");
        assert_eq!(habit.completion_history().len(), 1);

        let output = run(&mut reopened, "9\n11\n12\nEXERCISE\n3\n");
        assert!(output.contains("All Habit Names:\n- Exercise\n"));
        assert!(output.contains("Longest streak (from file): 1"));
        assert!(output.contains("Streak for 'EXERCISE' (from file): 1"));
        assert!(output.contains("Longest streak: 1"));
    }

    #[test]
    fn test_invalid_periodicity_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = TrackerConfig::new(temp_dir.path().join("habits.json"));
        let mut session = Session::from_config(&config);

        let output = run(&mut session, "1\nRead\nmonthly\n5\nhourly\n10\nhourly\n");
        assert!(output.contains("Error: Periodicity must be 'daily' or 'weekly'"));
        assert!(output.contains("Hourly Habits:\n"));
        assert!(!output.contains("Unsupported periodicity"));
        assert!(session.tracker().is_empty());
    }

    #[test]
    fn test_analytics_on_missing_file_are_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = TrackerConfig::new(temp_dir.path().join("absent.json"));
        let mut session = Session::from_config(&config);

        let output = run(&mut session, "9\n11\n12\nRead\n");
        assert!(output.contains("All Habit Names:\n"));
        assert!(output.contains("Longest streak (from file): 0"));
        assert!(output.contains("Streak for 'Read' (from file): 0"));
        assert!(!config.data_file.exists());
    }
}
