//! Word list parsing
//!
//! Vocabulary files are newline-delimited 5-letter words; the used-word history
//! is a small CSV. Both are parsed into in-memory values before the engine sees them.

pub mod loader;
