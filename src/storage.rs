//! Game state persistence
//!
//! A store holds a single well-known slot with one serialized `GameState`:
//! one active game per client. The backend is an injected trait so the
//! session layer can run against a real file, an in-memory fake in tests, or
//! nothing at all when storage is unavailable.

use crate::game::GameState;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage failure
///
/// Never fatal to the engine: the session discards the slot and continues
/// with a fresh in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failure")]
    Io(#[from] io::Error),
    #[error("corrupted save payload")]
    Corrupt(#[from] serde_json::Error),
}

/// Backend holding the single saved game slot
pub trait GameStore {
    /// Read the saved state, `None` when the slot is empty
    ///
    /// # Errors
    /// `StorageError` when the slot cannot be read or parsed.
    fn load(&self) -> Result<Option<GameState>, StorageError>;

    /// Overwrite the slot with the given state
    ///
    /// # Errors
    /// `StorageError` when the slot cannot be written.
    fn save(&self, state: &GameState) -> Result<(), StorageError>;
}

/// File-backed store: one JSON document at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameStore for JsonFileStore {
    fn load(&self) -> Result<Option<GameState>, StorageError> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let state = serde_json::from_str(&payload)?;
        Ok(Some(state))
    }

    fn save(&self, state: &GameState) -> Result<(), StorageError> {
        let payload = serde_json::to_string(state)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory store
///
/// The slot keeps the serialized form so tests exercise the same payload
/// path as the file store. Also used as the swap-in fake wherever a
/// `GameStore` is injected.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the slot with a raw payload, valid or not
    pub fn set_raw(&self, payload: impl Into<String>) {
        *self.slot.borrow_mut() = Some(payload.into());
    }
}

impl GameStore for MemoryStore {
    fn load(&self) -> Result<Option<GameState>, StorageError> {
        self.slot
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(StorageError::from)
    }

    fn save(&self, state: &GameState) -> Result<(), StorageError> {
        let payload = serde_json::to_string(state)?;
        *self.slot.borrow_mut() = Some(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_state() -> GameState {
        let mut state = GameState::fresh(
            Word::new("BADGE").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        );
        state.submit_guess("SIREN").unwrap();
        state
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let state = sample_state();
        store.save(&state).unwrap();

        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn memory_store_corrupt_payload_errors() {
        let store = MemoryStore::new();
        store.set_raw("{not json");

        assert!(matches!(store.load(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn file_store_round_trip() {
        let path = std::env::temp_dir().join("word_patrol_store_round_trip.json");
        let _ = fs::remove_file(&path);

        let store = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_none());

        let state = sample_state();
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_store_corrupt_payload_errors() {
        let path = std::env::temp_dir().join("word_patrol_store_corrupt.json");
        fs::write(&path, "definitely not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StorageError::Corrupt(_))));

        let _ = fs::remove_file(&path);
    }
}
