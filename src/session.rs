//! Session lifecycle: rollover, resume, and write-back
//!
//! The session owns the day's `GameState` and wires the state machine to its
//! injected store and event sink. Persistence follows every mutation,
//! including in-progress input edits, so reloading mid-game loses nothing;
//! storage failures degrade the session to in-memory play rather than
//! crashing it.

use crate::core::WordError;
use crate::events::{EventSink, GameEvent};
use crate::game::{GameState, GuessError};
use crate::puzzle::select_daily_word;
use crate::storage::GameStore;
use chrono::NaiveDate;
use tracing::warn;

/// One player's live game for a single day
pub struct Session<S: GameStore, E: EventSink> {
    state: GameState,
    store: S,
    sink: E,
}

impl<S: GameStore, E: EventSink> Session<S, E> {
    /// Open today's session
    ///
    /// Resumes the persisted state verbatim when it belongs to `today`;
    /// otherwise starts a fresh `Playing` state for today's word, carrying
    /// streak and lifetime counters forward from any previous state. A load
    /// failure is logged and treated as an empty slot.
    pub fn start(store: S, sink: E, today: NaiveDate) -> Self {
        let previous = store.load().unwrap_or_else(|err| {
            warn!(%err, "discarding unreadable save, starting fresh");
            None
        });

        let state = match previous {
            Some(saved) if saved.last_played() == today => saved,
            Some(saved) => GameState::rollover(&saved, select_daily_word(today), today),
            None => GameState::fresh(select_daily_word(today), today),
        };

        let session = Self { state, store, sink };
        session.persist();
        session
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Submit the buffered input as a guess
    ///
    /// # Errors
    /// Propagates the state machine's rejection; nothing was mutated or
    /// persisted in that case.
    pub fn submit(&mut self) -> Result<Vec<GameEvent>, GuessError> {
        let input = self.state.current_input().to_owned();
        self.submit_word(&input)
    }

    /// Submit an explicit word, bypassing the input buffer
    ///
    /// # Errors
    /// Propagates the state machine's rejection; nothing was mutated or
    /// persisted in that case.
    pub fn submit_word(&mut self, raw: &str) -> Result<Vec<GameEvent>, GuessError> {
        let events = self.state.submit_guess(raw)?;

        for event in &events {
            self.sink.handle(event);
        }
        self.persist();

        Ok(events)
    }

    /// Type a letter into the input buffer and checkpoint it
    pub fn type_letter(&mut self, letter: char) {
        self.state.push_letter(letter);
        self.persist();
    }

    /// Erase the last buffered letter and checkpoint
    pub fn erase_letter(&mut self) {
        self.state.pop_letter();
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.state) {
            warn!(%err, "save failed, continuing in memory");
        }
    }
}

/// Human-readable rejection message for a refused submission
#[must_use]
pub fn rejection_message(err: &GuessError) -> &'static str {
    match err {
        GuessError::InvalidWord(WordError::InvalidLength(_)) => "Enter a 5-letter word",
        GuessError::InvalidWord(_) => "Letters only",
        GuessError::GameOver => "Come back tomorrow for a new word",
    }
}
