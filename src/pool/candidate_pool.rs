//! The classified vocabulary

use super::tier::{PlayMode, Tier};
use super::used_words::UsedWordIndex;
use crate::cache::QualityTiers;
use crate::config::AdvisorConfig;
use crate::core::{GuessRecord, Word};
use crate::filter::Constraints;
use crate::wordlists::loader::parse_word_list;
use rustc_hash::FxHashSet;

/// A vocabulary word and whether it may still be the hidden answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: Word,
    is_possible_answer: bool,
}

impl WordEntry {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// False for guess-only words and for answers already used in a past game
    #[inline]
    #[must_use]
    pub const fn is_possible_answer(&self) -> bool {
        self.is_possible_answer
    }
}

/// Full vocabulary plus the auxiliary quality-tier sets
///
/// Only [`CandidatePool::apply_used_words`] mutates the possible-answer flags;
/// it must run before the first recommendation of a session.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    entries: Vec<WordEntry>,
    high_quality: Vec<Word>,
    top_guess_only: Vec<Word>,
}

impl CandidatePool {
    /// Build a pool from answer-eligible and guess-only words
    ///
    /// Duplicates are dropped; a word present in both lists stays answer-eligible.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::pool::CandidatePool;
    /// use wordle_advisor::wordlists::loader::words_from_slice;
    ///
    /// let pool = CandidatePool::new(
    ///     words_from_slice(&["crane", "slate"]),
    ///     words_from_slice(&["soare", "crane"]),
    /// );
    /// assert_eq!(pool.len(), 3);
    /// assert_eq!(pool.answer_words().count(), 2);
    /// ```
    #[must_use]
    pub fn new(answers: Vec<Word>, guess_only: Vec<Word>) -> Self {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut entries = Vec::with_capacity(answers.len() + guess_only.len());

        let classified = answers
            .into_iter()
            .map(|word| (word, true))
            .chain(guess_only.into_iter().map(|word| (word, false)));

        for (word, is_possible_answer) in classified {
            if seen.insert(word.text().to_string()) {
                entries.push(WordEntry {
                    word,
                    is_possible_answer,
                });
            }
        }

        Self {
            entries,
            high_quality: Vec::new(),
            top_guess_only: Vec::new(),
        }
    }

    /// Build a pool from two newline-delimited word lists
    #[must_use]
    pub fn from_word_lists(answers: &str, guess_only: &str) -> Self {
        Self::new(parse_word_list(answers), parse_word_list(guess_only))
    }

    /// Attach quality tiers; invalid words in the snapshot are skipped
    #[must_use]
    pub fn with_quality_tiers(mut self, tiers: &QualityTiers) -> Self {
        self.set_quality_tiers(tiers);
        self
    }

    /// Replace the quality tiers
    ///
    /// Snapshot words outside the vocabulary are dropped, so a stale snapshot
    /// never introduces an illegal guess.
    pub fn set_quality_tiers(&mut self, tiers: &QualityTiers) {
        let vocabulary: FxHashSet<&str> = self.words().map(Word::text).collect();
        let to_words = |texts: &[String]| -> Vec<Word> {
            let mut seen = FxHashSet::default();
            texts
                .iter()
                .filter_map(|text| Word::new(text.as_str()).ok())
                .filter(|word| vocabulary.contains(word.text()))
                .filter(|word| seen.insert(word.text().to_string()))
                .collect()
        };

        let high_quality = to_words(&tiers.high_quality);
        let top_guess_only = to_words(&tiers.top_guess_only);

        let dropped = tiers.high_quality.len() + tiers.top_guess_only.len()
            - high_quality.len()
            - top_guess_only.len();
        if dropped > 0 {
            log::warn!("Dropped {dropped} quality-tier entries not usable with this vocabulary");
        }

        self.high_quality = high_quality;
        self.top_guess_only = top_guess_only;
        log::debug!(
            "Quality tiers attached: {} high-quality, {} top guess-only",
            self.high_quality.len(),
            self.top_guess_only.len()
        );
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every legal guess
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(WordEntry::word)
    }

    /// Words still eligible to be the hidden answer
    pub fn answer_words(&self) -> impl Iterator<Item = &Word> {
        self.entries
            .iter()
            .filter(|entry| entry.is_possible_answer)
            .map(WordEntry::word)
    }

    #[must_use]
    pub fn high_quality(&self) -> &[Word] {
        &self.high_quality
    }

    #[must_use]
    pub fn top_guess_only(&self) -> &[Word] {
        &self.top_guess_only
    }

    /// Clear the possible-answer flag of every word the index excludes
    ///
    /// Returns how many entries changed. Re-applying the same index and cutoff
    /// changes nothing.
    pub fn apply_used_words(&mut self, index: &UsedWordIndex, cutoff: Option<u32>) -> usize {
        let mut cleared = 0;
        for entry in &mut self.entries {
            if entry.is_possible_answer && index.excludes(entry.word.text(), cutoff) {
                entry.is_possible_answer = false;
                cleared += 1;
            }
        }

        log::info!(
            "Reclassified {cleared} used words as guess-only (cutoff: {})",
            cutoff.map_or_else(|| "none".to_string(), |c| c.to_string())
        );
        cleared
    }

    /// Answer-eligible words consistent with the history
    #[must_use]
    pub fn possible_answers(&self, history: &[GuessRecord]) -> Vec<&Word> {
        let constraints = Constraints::from_history(history);
        self.answer_words()
            .filter(|word| constraints.is_satisfied_by(word))
            .collect()
    }

    /// Every vocabulary word consistent with the history (hard-mode guesses)
    #[must_use]
    pub fn consistent_words(&self, history: &[GuessRecord]) -> Vec<&Word> {
        let constraints = Constraints::from_history(history);
        self.words()
            .filter(|word| constraints.is_satisfied_by(word))
            .collect()
    }

    /// Words to score this turn under the tiering policy
    #[must_use]
    pub fn select_candidates<'a>(
        &'a self,
        possible_answers: &[&'a Word],
        history: &[GuessRecord],
        mode: PlayMode,
        config: &AdvisorConfig,
    ) -> Vec<&'a Word> {
        let tier = Tier::select(mode, possible_answers.len(), config);

        let candidates: Vec<&Word> = match tier {
            Tier::Hard => self.consistent_words(history),
            Tier::Early if !self.high_quality.is_empty() => self.high_quality.iter().collect(),
            Tier::Early | Tier::Late => self.words().collect(),
            Tier::Mid => {
                let mut seen: FxHashSet<&str> = FxHashSet::default();
                possible_answers
                    .iter()
                    .copied()
                    .chain(self.top_guess_only.iter())
                    .filter(|&word| seen.insert(word.text()))
                    .collect()
            }
        };

        log::debug!(
            "Tier {tier:?} for {} possible answers: {} candidates",
            possible_answers.len(),
            candidates.len()
        );
        candidates
    }
}
