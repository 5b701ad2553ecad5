//! Daily challenge vocabulary
//!
//! Provides the embedded word list compiled into the binary. The list is an
//! ordered rotation: its sequence, combined with the day of the year, decides
//! which word each calendar date gets.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;

/// Convert the embedded rotation into validated [`Word`]s
///
/// # Panics
/// Panics if the embedded list contains an invalid entry. The build script
/// enforces the 5-uppercase-letter invariant, so this cannot fire for a
/// correctly built binary.
#[must_use]
pub fn words() -> Vec<Word> {
    WORDS
        .iter()
        .map(|&s| Word::new(s).expect("embedded word list is validated at build time"))
        .collect()
}
