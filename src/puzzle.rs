//! Deterministic daily puzzle selection
//!
//! "Today's word" is derived from the calendar date alone: day-of-year modulo
//! the rotation length. The same date always yields the same word on every
//! client with no server round-trip, which is what makes streaks and shared
//! grids comparable between players.

use crate::core::Word;
use crate::wordlist;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Select the challenge word for a calendar date
///
/// Pure and deterministic: `day_of_year mod rotation_length` indexes the
/// embedded word list. No error path; the rotation is non-empty by build-time
/// invariant.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use word_patrol::puzzle::select_daily_word;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// assert_eq!(select_daily_word(date), select_daily_word(date));
/// ```
#[must_use]
pub fn select_daily_word(date: NaiveDate) -> Word {
    let words = wordlist::words();
    let index = date.ordinal0() as usize % words.len();
    words[index].clone()
}

/// A single day's puzzle
///
/// Derived, never stored: always recomputable from its date, so it needs no
/// persistence of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub date: NaiveDate,
    pub target: Word,
}

impl DailyPuzzle {
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            target: select_daily_word(date),
        }
    }
}

/// Time remaining until the next puzzle unlocks (local midnight)
///
/// Display-only: recomputed on a timer for the countdown line and never fed
/// back into game state.
#[must_use]
pub fn time_until_next_puzzle(now: NaiveDateTime) -> Duration {
    let next_midnight = now
        .date()
        .succ_opt()
        .map_or(NaiveDateTime::MAX, |tomorrow| {
            tomorrow.and_time(NaiveTime::MIN)
        });
    next_midnight - now
}

/// Format a countdown duration as `HH:MM` for display
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let minutes = remaining.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
