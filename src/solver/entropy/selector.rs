//! Parallel entropy ranking
//!
//! Every candidate is scored independently against the same read-only
//! evaluation set, so the fan-out needs no synchronization beyond the collect.

use super::calculator::calculate_entropy;
use crate::core::Word;
use crate::solver::recommendation::{Recommendation, sort_ranked};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Score every candidate and return them best first
///
/// `evaluation` is the (possibly sampled) answer set each candidate is scored
/// against; `possible_answers` is the full set, used for the remaining count
/// and the possible-answer flag. `on_scored` runs once per scored candidate.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::rank_candidates;
///
/// let guesses = vec![Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let answers = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let answer_refs: Vec<&Word> = answers.iter().collect();
///
/// let ranked = rank_candidates(&guess_refs, &answer_refs, &answer_refs, || {});
/// assert_eq!(ranked[0].word, "aeros");
/// ```
pub fn rank_candidates<F>(
    candidates: &[&Word],
    evaluation: &[&Word],
    possible_answers: &[&Word],
    on_scored: F,
) -> Vec<Recommendation>
where
    F: Fn() + Sync,
{
    let answer_set: FxHashSet<&str> = possible_answers.iter().map(|w| w.text()).collect();
    let remaining = possible_answers.len();

    let mut ranked: Vec<Recommendation> = candidates
        .par_iter()
        .map(|&guess| {
            let score = calculate_entropy(guess, evaluation);
            on_scored();
            Recommendation::new(
                guess.text(),
                score,
                remaining,
                answer_set.contains(guess.text()),
            )
        })
        .collect();

    sort_ranked(&mut ranked);
    ranked
}
