/// Menu entries and their parsing

/// Menu shown before every prompt
pub const MENU: &str = "\
Habit Tracker CLI
1. Add Habit
2. Complete Habit
3. Show Longest Streak
4. Show All Habits
5. Show Habits by Periodicity
6. Delete Habit
7. View Completion History
8. Save and Exit
9. ANALYTICS: Show All Habit Names (from file)
10. ANALYTICS: Filter by Periodicity (from file)
11. ANALYTICS: Longest Overall Streak (from file)
12. ANALYTICS: Streak for Specific Habit (from file)";

/// One action the user can pick from the menu
/// 
/// Entries 9 to 12 read the data file on disk rather than the live tracker,
/// so they only see what was last saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddHabit,
    CompleteHabit,
    LongestStreak,
    ListHabits,
    ListByPeriodicity,
    DeleteHabit,
    CompletionHistory,
    SaveAndExit,
    FileHabitNames,
    FileByPeriodicity,
    FileLongestStreak,
    FileHabitStreak,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::AddHabit,
            "2" => MenuChoice::CompleteHabit,
            "3" => MenuChoice::LongestStreak,
            "4" => MenuChoice::ListHabits,
            "5" => MenuChoice::ListByPeriodicity,
            "6" => MenuChoice::DeleteHabit,
            "7" => MenuChoice::CompletionHistory,
            "8" => MenuChoice::SaveAndExit,
            "9" => MenuChoice::FileHabitNames,
            "10" => MenuChoice::FileByPeriodicity,
            "11" => MenuChoice::FileLongestStreak,
            "12" => MenuChoice::FileHabitStreak,
            _ => return None,
        };
        Some(choice)
    }
}
