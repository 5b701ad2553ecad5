//! Word Patrol
//!
//! A daily Wordle-style challenge over a law-enforcement vocabulary. The
//! day's word is derived deterministically from the calendar date, guesses
//! are classified with the standard two-pass duplicate-aware rules, and the
//! day's state persists to a single save slot so a returning player resumes
//! where they left off.
//!
//! # Quick Start
//!
//! ```rust
//! use word_patrol::core::{Word, evaluate};
//! use word_patrol::puzzle::select_daily_word;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
//! let answer = select_daily_word(today);
//!
//! let guess = Word::new("BADGE").unwrap();
//! let row = evaluate(&guess, &answer);
//! println!("{}", word_patrol::core::row_emoji(&row));
//! ```

// Core domain types
pub mod core;

// Deterministic daily puzzle selection
pub mod puzzle;

// Game state machine, scoring, streaks
pub mod game;

// Events emitted on terminal transitions
pub mod events;

// Save-slot persistence
pub mod storage;

// Session lifecycle: rollover, resume, write-back
pub mod session;

// Shareable result text
pub mod share;

// Daily vocabulary
pub mod wordlist;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
