//! Core domain types for the daily word challenge
//!
//! This module contains the fundamental domain types with no game-state
//! dependencies. All types here are pure, testable, and have clear
//! position-by-position semantics.

mod evaluation;
mod word;

pub use evaluation::{LetterState, LetterStatus, evaluate, row_emoji};
pub use word::{Word, WordError};
