//! Challenge word representation
//!
//! A Word stores a validated uppercase 5-letter word. All guesses and daily
//! answers flow through this type, so everything downstream of construction
//! can assume exactly 5 ASCII letters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validated 5-letter challenge word
///
/// Input is normalized to uppercase on construction; comparison is therefore
/// case-insensitive at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: [u8; 5],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains non-alphabetic characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_patrol::core::Word;
    ///
    /// let word = Word::new("badge").unwrap();
    /// assert_eq!(word.text(), "BADGE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("b4dge").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_uppercase();

        if text.len() != 5 {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Safe to unwrap as we validated length == 5
        let chars: [u8; 5] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator's consume-from-pool pass for duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("BADGE").unwrap();
        assert_eq!(word.text(), "BADGE");
        assert_eq!(word.chars(), b"BADGE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("badge").unwrap();
        assert_eq!(word.text(), "BADGE");

        let word2 = Word::new("BaDgE").unwrap();
        assert_eq!(word2.text(), "BADGE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new("SHRT"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("BADG3").is_err()); // Number
        assert!(Word::new("BADG ").is_err()); // Space
        assert!(Word::new("BADG!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("LEVEL").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'L'), Some(&2));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'V'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_unique() {
        let word = Word::new("BADGE").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("siren").unwrap();
        assert_eq!(format!("{word}"), "SIREN");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("COURT").unwrap();
        let word2 = Word::new("court").unwrap();
        let word3 = Word::new("JUDGE").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_serde_round_trip() {
        let word = Word::new("GAVEL").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"GAVEL\"");

        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }

    #[test]
    fn word_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Word>("\"TOOLONG\"").is_err());
        assert!(serde_json::from_str::<Word>("\"AB1DE\"").is_err());
    }
}
