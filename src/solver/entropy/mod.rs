//! Entropy-based candidate scoring
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions,
//! with uniform sampling of large answer sets and parallel ranking.

mod calculator;
mod selector;

pub use calculator::{EntropyScorer, calculate_entropy, shannon_entropy};
pub use selector::rank_candidates;
