/// Streak calculation over a habit's completion history
/// 
/// A streak is the number of consecutive completions, counted from an anchor
/// completion, whose gaps all satisfy the habit's periodicity. Two walking
/// rules exist and both are kept: the tracker uses `OldestFirst`, the
/// raw-file analytics use `NewestFirst`. They disagree at period edges, so
/// callers pick the variant explicitly.

use chrono::Duration;

use crate::domain::{Periodicity, Timestamp};

/// Which end of the history anchors the streak, and which gap rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakVariant {
    /// Walk from the most recent completion backwards.
    /// 
    /// Gaps are compared as whole elapsed days (truncated): daily needs
    /// exactly one day, weekly needs between one and seven days.
    NewestFirst,
    /// Walk from the earliest completion forwards.
    /// 
    /// A gap continues the streak while it is at most one full period.
    OldestFirst,
}

impl StreakVariant {
    /// Whether a gap between two neighbouring completions keeps the streak alive
    /// 
    /// `gap` is always the later completion minus the earlier one.
    pub fn continues(&self, gap: Duration, periodicity: Periodicity) -> bool {
        match self {
            StreakVariant::NewestFirst => {
                let days = gap.num_days();
                match periodicity {
                    Periodicity::Daily => days == 1,
                    Periodicity::Weekly => days > 0 && days <= 7,
                }
            }
            StreakVariant::OldestFirst => gap <= periodicity.period(),
        }
    }
    
    fn sort(&self, completions: &mut [Timestamp]) {
        match self {
            StreakVariant::NewestFirst => completions.sort_by(|a, b| b.cmp(a)),
            StreakVariant::OldestFirst => completions.sort(),
        }
    }
}

/// Count the consecutive completions starting at the variant's anchor
/// 
/// The input may be unsorted. An empty history yields 0 and any non-empty
/// history yields at least 1, since the anchor itself counts. The walk stops
/// at the first gap that breaks the periodicity rule.
pub fn compute_streak(
    completions: &[Timestamp],
    periodicity: Periodicity,
    variant: StreakVariant,
) -> u32 {
    if completions.is_empty() {
        return 0;
    }
    
    let mut ordered = completions.to_vec();
    variant.sort(&mut ordered);
    
    let continued = ordered
        .windows(2)
        .take_while(|pair| {
            let gap = if pair[0] > pair[1] {
                pair[0] - pair[1]
            } else {
                pair[1] - pair[0]
            };
            variant.continues(gap, periodicity)
        })
        .count();
    
    1 + continued as u32
}
