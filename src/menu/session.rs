/// Interactive session loop
///
/// The session owns the live tracker and the storage it was loaded from. It
/// reads one line per menu choice from any `BufRead`, writes to any `Write`,
/// and keeps going after a failed action until the user saves and exits or
/// the input ends.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::analytics;
use crate::domain::display_timestamp;
use crate::menu::{MenuChoice, MENU};
use crate::storage::HabitStorage;
use crate::tracker::HabitTracker;
use crate::TrackerError;

/// What the loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// A menu session over a tracker loaded from storage
pub struct Session<S: HabitStorage> {
    tracker: HabitTracker,
    storage: S,
}

impl<S: HabitStorage> Session<S> {
    /// Load the tracker from storage and start a session over it
    pub fn open(storage: S) -> Self {
        let tracker = HabitTracker::load_from(&storage);
        Self::with_tracker(tracker, storage)
    }

    /// Start a session over an already built tracker
    pub fn with_tracker(tracker: HabitTracker, storage: S) -> Self {
        Self { tracker, storage }
    }

    pub fn tracker(&self) -> &HabitTracker {
        &self.tracker
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Run the menu until the user saves and exits or the input ends
    ///
    /// Only a failure to write to `output` (or read from `input`) ends the
    /// loop with an error. Everything else is printed and the menu is shown
    /// again. Reaching the end of input stops the session without saving.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<(), TrackerError> {
        info!("Starting session with {} habits", self.tracker.len());

        loop {
            writeln!(output, "\n{}", MENU)?;
            let Some(line) = prompt(&mut input, &mut output, "Enter your choice: ")? else {
                info!("Input closed, ending session without saving");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line.to_lowercase()) else {
                writeln!(output, "Invalid choice. Please try again.")?;
                continue;
            };
            debug!("Menu choice: {:?}", choice);

            match self.dispatch(choice, &mut input, &mut output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Ok(Flow::EndOfInput) => {
                    info!("Input closed, ending session without saving");
                    break;
                }
                Err(TrackerError::Io(e)) => return Err(TrackerError::Io(e)),
                Err(e) => {
                    warn!("Action {:?} failed: {}", choice, e);
                    writeln!(output, "Error: {}", e)?;
                }
            }
        }

        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow, TrackerError> {
        match choice {
            MenuChoice::AddHabit => {
                let Some(name) = prompt(input, output, "Enter habit name: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let Some(periodicity) = prompt(input, output, "Enter habit periodicity (daily/weekly): ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let periodicity = periodicity.to_lowercase();
                self.tracker.add_habit(&name, &periodicity)?;
                writeln!(output, "Habit '{}' added with '{}' periodicity.", name, periodicity)?;
            }
            MenuChoice::CompleteHabit => {
                let Some(name) = prompt(input, output, "Enter habit name to complete: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                self.tracker.complete_habit(&name)?;
                writeln!(output, "Habit '{}' marked as completed.", name)?;
            }
            MenuChoice::LongestStreak => {
                writeln!(output, "Longest streak: {}", self.tracker.longest_streak())?;
            }
            MenuChoice::ListHabits => {
                for habit in self.tracker.habits() {
                    writeln!(
                        output,
                        "Habit: {}, Periodicity: {}, Streak: {}",
                        habit.name,
                        habit.periodicity,
                        habit.streak()
                    )?;
                }
            }
            MenuChoice::ListByPeriodicity => {
                let Some(periodicity) = prompt(input, output, "Enter periodicity (daily/weekly): ")? else {
                    return Ok(Flow::EndOfInput);
                };
                for habit in self.tracker.habits_by_periodicity(&periodicity.to_lowercase())? {
                    writeln!(output, "Habit: {}, Streak: {}", habit.name, habit.streak())?;
                }
            }
            MenuChoice::DeleteHabit => {
                let Some(name) = prompt(input, output, "Enter habit name to delete: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                self.tracker.delete_habit(&name)?;
                writeln!(output, "Habit '{}' has been deleted.", name)?;
            }
            MenuChoice::CompletionHistory => {
                let Some(name) = prompt(input, output, "Enter habit name to view history: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                match self.tracker.get_habit(&name) {
                    Some(habit) if habit.completion_history().is_empty() => {
                        writeln!(output, "No completions recorded for '{}'.", name)?;
                    }
                    Some(habit) => {
                        writeln!(output, "Completion history for '{}':", name)?;
                        for completion in habit.completion_history() {
                            writeln!(output, "- {}", display_timestamp(completion))?;
                        }
                    }
                    None => writeln!(output, "Habit '{}' not found.", name)?,
                }
            }
            MenuChoice::SaveAndExit => {
                self.tracker.save_to(&self.storage)?;
                writeln!(output, "Habits saved. Exiting...")?;
                return Ok(Flow::Exit);
            }
            MenuChoice::FileHabitNames => {
                let records = self.storage.load_records_or_empty();
                writeln!(output, "All Habit Names:")?;
                for name in analytics::all_habit_names(&records) {
                    writeln!(output, "- {}", name)?;
                }
            }
            MenuChoice::FileByPeriodicity => {
                let Some(periodicity) = prompt(input, output, "Enter periodicity (daily/weekly): ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let periodicity = periodicity.to_lowercase();
                let records = self.storage.load_records_or_empty();
                let matching = analytics::habits_by_periodicity(&records, &periodicity);
                writeln!(output, "{} Habits:", capitalize(&periodicity))?;
                for record in matching {
                    writeln!(output, "- {}", record.name)?;
                }
            }
            MenuChoice::FileLongestStreak => {
                let records = self.storage.load_records_or_empty();
                let longest = analytics::longest_streak(&records)?;
                writeln!(output, "Longest streak (from file): {}", longest)?;
            }
            MenuChoice::FileHabitStreak => {
                let Some(name) = prompt(input, output, "Enter habit name: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let records = self.storage.load_records_or_empty();
                let streak = analytics::streak_for_habit(&records, &name)?;
                writeln!(output, "Streak for '{}' (from file): {}", name, streak)?;
            }
        }

        Ok(Flow::Continue)
    }
}

/// Print a prompt and read one trimmed line; `None` once the input is exhausted
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the read.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>, std::io::Error> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
