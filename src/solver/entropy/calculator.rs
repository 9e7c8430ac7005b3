//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of possible answers, computes the expected information gain.

use crate::core::{Pattern, Word};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Calculate Shannon entropy for a guess against possible answers
///
/// Returns the expected information gain in bits, or 0.0 for an empty answer set.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let answers = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let answer_refs: Vec<&Word> = answers.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &answer_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, answers: &[&Word]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(guess, answers);
    shannon_entropy(&pattern_counts)
}

/// Group answers by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, answers: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &answer in answers {
        let pattern = Pattern::calculate(guess, answer);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
/// - Depends only on the multiset of group sizes, never on map iteration order
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    // Summed in sorted order so equal partitions score bit-identically
    let mut sizes: Vec<usize> = pattern_counts
        .values()
        .copied()
        .filter(|&count| count > 0)
        .collect();
    sizes.sort_unstable();

    let entropy: f64 = sizes
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single group sums to -0.0
    if entropy > 0.0 { entropy } else { 0.0 }
}

/// Entropy scorer with uniform sampling of large answer sets
///
/// Scoring against a random subset of at most `sample_size` answers trades a
/// little accuracy for a large speedup early in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyScorer {
    sample_size: usize,
}

impl EntropyScorer {
    /// A `sample_size` of 0 disables sampling
    #[must_use]
    pub const fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// The answers a score is computed against
    ///
    /// Sets larger than `sample_size` are sampled uniformly without replacement;
    /// smaller sets are returned unchanged.
    #[must_use]
    pub fn evaluation_set<'a>(&self, answers: &[&'a Word]) -> Vec<&'a Word> {
        if self.sample_size == 0 || answers.len() <= self.sample_size {
            return answers.to_vec();
        }

        answers
            .choose_multiple(&mut rand::rng(), self.sample_size)
            .copied()
            .collect()
    }

    /// Expected bits of information from guessing `guess`
    #[must_use]
    pub fn score(&self, guess: &Word, answers: &[&Word]) -> f64 {
        calculate_entropy(guess, &self.evaluation_set(answers))
    }
}

impl Default for EntropyScorer {
    fn default() -> Self {
        Self::new(500)
    }
}
