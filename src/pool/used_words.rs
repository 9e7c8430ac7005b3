//! Historical answers that should no longer be treated as likely solutions

use rustc_hash::FxHashMap;

/// When a word was used as a daily answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedWord {
    /// Sequential game number
    pub game_id: u32,
    /// Calendar date as supplied by the history source
    pub date: String,
}

/// Mapping from word to the game that used it
#[derive(Debug, Clone, Default)]
pub struct UsedWordIndex {
    entries: FxHashMap<String, UsedWord>,
}

impl UsedWordIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a usage; later inserts for the same word replace earlier ones
    pub fn insert(&mut self, word: &str, game_id: u32, date: impl Into<String>) {
        self.entries.insert(
            word.trim().to_lowercase(),
            UsedWord {
                game_id,
                date: date.into(),
            },
        );
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&UsedWord> {
        self.entries.get(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` should lose its possible-answer status
    ///
    /// With a cutoff, only words used strictly before that game are excluded,
    /// so a game can be replayed as of a past point in time.
    #[must_use]
    pub fn excludes(&self, word: &str, cutoff: Option<u32>) -> bool {
        self.get(word)
            .is_some_and(|used| cutoff.is_none_or(|cutoff| used.game_id < cutoff))
    }
}

impl<S: Into<String>> FromIterator<(S, u32, S)> for UsedWordIndex {
    fn from_iter<I: IntoIterator<Item = (S, u32, S)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (word, game_id, date) in iter {
            let word: String = word.into();
            index.insert(&word, game_id, date);
        }
        index
    }
}
