//! Scored guesses

use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A scored candidate guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub word: String,
    /// Expected information gain in bits
    pub score: f64,
    /// Possible answers remaining when the guess was scored
    #[serde(default)]
    pub remaining: usize,
    /// Whether the guess could itself be the hidden answer
    pub is_possible_answer: bool,
}

impl Recommendation {
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        score: f64,
        remaining: usize,
        is_possible_answer: bool,
    ) -> Self {
        Self {
            word: word.into(),
            score,
            remaining,
            is_possible_answer,
        }
    }

    /// The only answer left; no further search is meaningful
    #[must_use]
    pub fn solution(word: &Word) -> Self {
        Self::new(word.text(), 1.0, 1, true)
    }

    /// Ranking order: higher score first, then possible answers, then alphabetical
    #[must_use]
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.is_possible_answer.cmp(&self.is_possible_answer))
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Sort best first
pub fn sort_ranked(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(Recommendation::ranking_cmp);
}
