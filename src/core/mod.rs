//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod guess_record;
mod pattern;
mod word;

pub use guess_record::{GuessRecord, GuessRecordError};
pub use pattern::{LetterState, Pattern};
pub use word::{WORD_LENGTH, Word, WordError};
