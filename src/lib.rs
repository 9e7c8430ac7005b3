//! Wordle Advisor
//!
//! Recommends the next Wordle guess by expected information gain over the
//! answers still consistent with the feedback so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::config::AdvisorConfig;
//! use wordle_advisor::core::GuessRecord;
//! use wordle_advisor::pool::{CandidatePool, PlayMode};
//! use wordle_advisor::solver::Advisor;
//!
//! let pool = CandidatePool::from_word_lists("trace\ngrace\nbrace\n", "trice\n");
//! let advisor = Advisor::new(pool, AdvisorConfig::default());
//!
//! let history = [GuessRecord::parse("crane", "YGGWG").unwrap()];
//! let recs = advisor.recommend(&history, PlayMode::Normal, 3);
//! assert_eq!(recs.len(), 3);
//! ```

// Core domain types
pub mod core;

// History constraints
pub mod filter;

// Vocabulary and candidate tiering
pub mod pool;

// Opening cache and quality-tier snapshots
pub mod cache;

// Engine tunables
pub mod config;

// Scoring and recommendation
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
