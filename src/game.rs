//! Game state machine
//!
//! Owns the attempt count, guess history, win/loss status, scoring, and
//! streak bookkeeping for one calendar day. All mutation happens here, in
//! response to submitted guesses; the session layer persists the state after
//! every transition.
//!
//! `Playing` is the only non-terminal state. `Won` and `Lost` are absorbing
//! for the rest of the day: nothing transitions out of them until the next
//! day's fresh state replaces this one.

use crate::core::{Word, WordError, evaluate};
use crate::events::GameEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Guesses allowed per day
pub const MAX_ATTEMPTS: u32 = 6;

/// Minimum streak length that earns a badge
pub const BADGE_STREAK: u32 = 3;

/// Win/loss status for the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A rejected guess submission
///
/// Recoverable by construction: nothing in the state changes and no attempt
/// is consumed, so the player just corrects their input and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("today's challenge is already over")]
    GameOver,
}

/// One player's daily challenge state
///
/// Created fresh on day rollover (lifetime counters carried forward),
/// restored verbatim when resuming the same day, and serialized after every
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    target: Word,
    guesses: Vec<Word>,
    #[serde(default)]
    current_input: String,
    status: GameStatus,
    attempts: u32,
    max_attempts: u32,
    points_awarded: u32,
    streak: u32,
    last_played: NaiveDate,
    total_games_played: u32,
    total_wins: u32,
}

impl GameState {
    /// Start a brand-new state with zeroed lifetime counters
    #[must_use]
    pub fn fresh(target: Word, today: NaiveDate) -> Self {
        Self {
            target,
            guesses: Vec::with_capacity(MAX_ATTEMPTS as usize),
            current_input: String::new(),
            status: GameStatus::Playing,
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
            points_awarded: 0,
            streak: 0,
            last_played: today,
            total_games_played: 0,
            total_wins: 0,
        }
    }

    /// Start today's state carrying streak and lifetime counters forward
    ///
    /// Used on day rollover: superseding yesterday's state is a replace, not
    /// a delete, so the long-lived counters survive.
    #[must_use]
    pub fn rollover(previous: &Self, target: Word, today: NaiveDate) -> Self {
        Self {
            streak: previous.streak,
            total_games_played: previous.total_games_played,
            total_wins: previous.total_wins,
            ..Self::fresh(target, today)
        }
    }

    /// Submit a guess and advance the state machine
    ///
    /// Returns the events emitted by the transition, empty while the game
    /// stays in `Playing`. A rejected submission (invalid word, or the game
    /// already being over) mutates nothing and consumes no attempt.
    ///
    /// # Errors
    /// `GuessError::InvalidWord` for input that is not a 5-letter alphabetic
    /// word; `GuessError::GameOver` when today's game already ended.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Vec<GameEvent>, GuessError> {
        if self.status != GameStatus::Playing {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(raw)?;

        self.attempts += 1;
        self.guesses.push(guess.clone());
        self.current_input.clear();

        let mut events = Vec::new();

        if guess == self.target {
            self.status = GameStatus::Won;
            self.points_awarded = points_for_attempts(self.attempts);
            self.streak += 1;
            self.total_wins += 1;
            self.total_games_played += 1;

            events.push(GameEvent::Won {
                points: self.points_awarded,
                attempts: self.attempts,
            });
            events.push(GameEvent::AwardPoints {
                points: self.points_awarded,
                attempts: self.attempts,
                max_attempts: self.max_attempts,
                date: self.last_played,
            });
            if self.streak >= BADGE_STREAK {
                events.push(GameEvent::AwardBadge {
                    streak: self.streak,
                });
            }
        } else if self.attempts == self.max_attempts {
            self.status = GameStatus::Lost;
            self.streak = 0;
            self.total_games_played += 1;

            events.push(GameEvent::Lost {
                answer: self.target.clone(),
            });
        }

        Ok(events)
    }

    /// Append a letter to the in-progress input
    ///
    /// Ignored unless the game is still playing, the letter is alphabetic,
    /// and fewer than 5 letters are buffered. Letters are stored uppercase.
    pub fn push_letter(&mut self, letter: char) {
        if self.status == GameStatus::Playing
            && letter.is_ascii_alphabetic()
            && self.current_input.len() < 5
        {
            self.current_input.push(letter.to_ascii_uppercase());
        }
    }

    /// Remove the last letter of the in-progress input
    pub fn pop_letter(&mut self) {
        if self.status == GameStatus::Playing {
            self.current_input.pop();
        }
    }

    /// Rank label for a finished game
    ///
    /// Pure display derivation from the attempt count (a loss ranks with the
    /// worst win); not persisted. Returns `None` while still playing.
    #[must_use]
    pub fn rank(&self) -> Option<&'static str> {
        let attempts = match self.status {
            GameStatus::Playing => return None,
            GameStatus::Won => self.attempts,
            GameStatus::Lost => MAX_ATTEMPTS,
        };

        Some(match attempts {
            1 => "Chief",
            2 => "Captain",
            3 => "Lieutenant",
            4 => "Sergeant",
            5 => "Officer",
            _ => "Recruit",
        })
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub const fn points_awarded(&self) -> u32 {
        self.points_awarded
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn last_played(&self) -> NaiveDate {
        self.last_played
    }

    #[must_use]
    pub const fn total_games_played(&self) -> u32 {
        self.total_games_played
    }

    #[must_use]
    pub const fn total_wins(&self) -> u32 {
        self.total_wins
    }

    /// Evaluate every submitted guess against the target
    #[must_use]
    pub fn evaluated_rows(&self) -> Vec<[crate::core::LetterState; 5]> {
        self.guesses
            .iter()
            .map(|guess| evaluate(guess, &self.target))
            .collect()
    }
}

/// Points for a win on the given attempt
///
/// `100 + max(0, 7 - attempts) * 20`: attempt 1 scores 220, attempt 6 scores
/// 120. The clamp keeps the formula total even for attempt counts beyond the
/// limit, which cannot occur with six attempts per day.
#[must_use]
pub fn points_for_attempts(attempts: u32) -> u32 {
    100 + 7u32.saturating_sub(attempts) * 20
}
