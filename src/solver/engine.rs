//! Recommendation engine
//!
//! Resolves the possible answers for a history, picks the candidate tier,
//! scores candidates in parallel and returns a ranked list.

use super::entropy::{EntropyScorer, rank_candidates};
use super::recommendation::Recommendation;
use crate::cache::{OpeningCache, QualityTiers};
use crate::config::AdvisorConfig;
use crate::core::{GuessRecord, Word};
use crate::pool::{CandidatePool, PlayMode, UsedWordIndex, is_high_quality};

/// Main recommendation engine
///
/// Owns the candidate pool. Reclassification takes `&mut self`, so it cannot
/// overlap with an in-flight recommendation.
#[derive(Debug, Clone)]
pub struct Advisor {
    pool: CandidatePool,
    openings: Option<OpeningCache>,
    scorer: EntropyScorer,
    config: AdvisorConfig,
}

impl Advisor {
    /// Create an engine over a pool
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::config::AdvisorConfig;
    /// use wordle_advisor::core::GuessRecord;
    /// use wordle_advisor::pool::{CandidatePool, PlayMode};
    /// use wordle_advisor::solver::Advisor;
    ///
    /// let pool = CandidatePool::from_word_lists("trace\ncrate\nslate\n", "soare\n");
    /// let advisor = Advisor::new(pool, AdvisorConfig::default());
    ///
    /// let history = [GuessRecord::parse("crane", "YGGWG").unwrap()];
    /// let recs = advisor.recommend(&history, PlayMode::Normal, 3);
    /// assert_eq!(recs.len(), 1);
    /// assert_eq!(recs[0].word, "trace");
    /// ```
    #[must_use]
    pub fn new(pool: CandidatePool, config: AdvisorConfig) -> Self {
        Self {
            pool,
            openings: None,
            scorer: EntropyScorer::new(config.sample_size),
            config,
        }
    }

    /// Attach a precomputed opening cache
    #[must_use]
    pub fn with_opening_cache(mut self, openings: Option<OpeningCache>) -> Self {
        self.openings = openings;
        self
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Reclassify historical answers; see [`CandidatePool::apply_used_words`]
    pub fn apply_used_words(&mut self, index: &UsedWordIndex, cutoff: Option<u32>) -> usize {
        self.pool.apply_used_words(index, cutoff)
    }

    /// Answer-eligible words consistent with the history
    #[must_use]
    pub fn possible_answers(&self, history: &[GuessRecord]) -> Vec<&Word> {
        self.pool.possible_answers(history)
    }

    /// Ranked top-`top_n` guesses for the next turn
    ///
    /// Short-circuits, in order:
    /// 1. empty history with a cached opening for `mode`: the cached ranking
    /// 2. no possible answers: an empty list
    /// 3. exactly one possible answer: that word with score 1.0
    ///
    /// An empty result means no viable guess exists.
    #[must_use]
    pub fn recommend(
        &self,
        history: &[GuessRecord],
        mode: PlayMode,
        top_n: usize,
    ) -> Vec<Recommendation> {
        if history.is_empty()
            && let Some(openings) = self.openings.as_ref().and_then(|c| c.for_mode(mode))
        {
            log::debug!("Serving {mode} opening from cache");
            return openings.iter().take(top_n).cloned().collect();
        }

        let mut ranked = self.rank(history, mode, || {});
        ranked.truncate(top_n);
        ranked
    }

    /// Full live ranking, ignoring the opening cache
    fn rank<F>(&self, history: &[GuessRecord], mode: PlayMode, on_scored: F) -> Vec<Recommendation>
    where
        F: Fn() + Sync,
    {
        let possible = self.pool.possible_answers(history);

        match possible.as_slice() {
            [] => {
                log::debug!("No possible answers remain after {} guesses", history.len());
                return Vec::new();
            }
            [only] => return vec![Recommendation::solution(only)],
            _ => {}
        }

        let candidates = self
            .pool
            .select_candidates(&possible, history, mode, &self.config);
        if candidates.is_empty() {
            return Vec::new();
        }

        let evaluation = self.scorer.evaluation_set(&possible);
        log::debug!(
            "Scoring {} candidates against {} of {} possible answers",
            candidates.len(),
            evaluation.len(),
            possible.len()
        );

        rank_candidates(&candidates, &evaluation, &possible, on_scored)
    }

    /// Compute opening recommendations for both modes offline
    #[must_use]
    pub fn generate_opening_cache(&self, top_n: usize) -> OpeningCache {
        self.generate_opening_cache_with_progress(top_n, || {})
    }

    /// Like [`Advisor::generate_opening_cache`], calling `on_scored` per candidate
    pub fn generate_opening_cache_with_progress<F>(&self, top_n: usize, on_scored: F) -> OpeningCache
    where
        F: Fn() + Sync,
    {
        let mut openings = OpeningCache::default();
        for (mode, slot) in [
            (PlayMode::Normal, &mut openings.normal),
            (PlayMode::Hard, &mut openings.hard),
        ] {
            let mut ranked = self.rank(&[], mode, &on_scored);
            ranked.truncate(top_n);
            log::info!("Generated {} {mode} openings", ranked.len());
            *slot = ranked;
        }
        openings
    }

    /// Compute quality tiers offline
    ///
    /// Scores the full vocabulary against the opening answer set. High-quality
    /// words keep that order; the top guess-only words are the best
    /// `top_guess_only` words that are not answer-eligible.
    #[must_use]
    pub fn generate_quality_tiers(&self, top_guess_only: usize) -> QualityTiers {
        self.generate_quality_tiers_with_progress(top_guess_only, || {})
    }

    /// Like [`Advisor::generate_quality_tiers`], calling `on_scored` per candidate
    pub fn generate_quality_tiers_with_progress<F>(
        &self,
        top_guess_only: usize,
        on_scored: F,
    ) -> QualityTiers
    where
        F: Fn() + Sync,
    {
        let answers: Vec<&Word> = self.pool.answer_words().collect();
        let vocabulary: Vec<&Word> = self.pool.words().collect();
        let evaluation = self.scorer.evaluation_set(&answers);
        let ranked = rank_candidates(&vocabulary, &evaluation, &answers, on_scored);

        let high_quality: Vec<String> = ranked
            .iter()
            .filter(|rec| Word::new(rec.word.as_str()).is_ok_and(|w| is_high_quality(&w)))
            .map(|rec| rec.word.clone())
            .collect();
        let top_guess_only: Vec<String> = ranked
            .iter()
            .filter(|rec| !rec.is_possible_answer)
            .take(top_guess_only)
            .map(|rec| rec.word.clone())
            .collect();

        log::info!(
            "Generated quality tiers: {} high-quality of {} words, {} top guess-only",
            high_quality.len(),
            vocabulary.len(),
            top_guess_only.len()
        );

        QualityTiers {
            high_quality,
            top_guess_only,
        }
    }
}
