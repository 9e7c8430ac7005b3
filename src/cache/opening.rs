//! Opening-move cache, keyed by play mode

use super::CacheError;
use crate::core::Word;
use crate::pool::PlayMode;
use crate::solver::Recommendation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ranked first-guess recommendations for each play mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningCache {
    #[serde(default)]
    pub normal: Vec<Recommendation>,
    #[serde(default)]
    pub hard: Vec<Recommendation>,
}

impl OpeningCache {
    /// Cached openings for `mode`, or `None` if that slot is empty
    #[must_use]
    pub fn for_mode(&self, mode: PlayMode) -> Option<&[Recommendation]> {
        let slot = match mode {
            PlayMode::Normal => &self.normal,
            PlayMode::Hard => &self.hard,
        };
        (!slot.is_empty()).then_some(slot.as_slice())
    }

    /// Parse a cache, dropping entries whose word is not a valid 5-letter word
    ///
    /// # Errors
    /// Returns `CacheError::Json` if the text is not a valid cache document.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::cache::OpeningCache;
    /// use wordle_advisor::pool::PlayMode;
    ///
    /// let cache = OpeningCache::from_json(
    ///     r#"{"normal": [{"word": "soare", "score": 5.88, "isPossibleAnswer": false}]}"#,
    /// ).unwrap();
    ///
    /// assert_eq!(cache.for_mode(PlayMode::Normal).unwrap()[0].word, "soare");
    /// assert!(cache.for_mode(PlayMode::Hard).is_none());
    /// ```
    pub fn from_json(text: &str) -> Result<Self, CacheError> {
        let mut cache: Self = serde_json::from_str(text)?;
        for slot in [&mut cache.normal, &mut cache.hard] {
            slot.retain(|rec| Word::new(rec.word.as_str()).is_ok());
        }
        Ok(cache)
    }

    /// # Errors
    /// Returns `CacheError` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// # Errors
    /// Returns `CacheError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, CacheError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load an opening cache, logging and returning `None` on any failure
pub fn load_opening_cache(path: impl AsRef<Path>) -> Option<OpeningCache> {
    let path = path.as_ref();
    match OpeningCache::load(path) {
        Ok(cache) => {
            log::info!(
                "Loaded opening cache from {} ({} normal, {} hard)",
                path.display(),
                cache.normal.len(),
                cache.hard.len()
            );
            Some(cache)
        }
        Err(e) => {
            log::warn!(
                "Ignoring opening cache {}: {e}; openings will be computed live",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "normal": [
            {"word": "soare", "score": 5.89, "isPossibleAnswer": false},
            {"word": "raise", "score": 5.88, "isPossibleAnswer": true}
        ],
        "hard": [
            {"word": "salet", "score": 5.84, "isPossibleAnswer": false}
        ]
    }"#;

    #[test]
    fn parses_both_slots() {
        let cache = OpeningCache::from_json(SAMPLE).unwrap();
        let normal = cache.for_mode(PlayMode::Normal).unwrap();
        assert_eq!(normal.len(), 2);
        assert_eq!(normal[1].word, "raise");
        assert!(normal[1].is_possible_answer);
        assert_eq!(cache.for_mode(PlayMode::Hard).unwrap()[0].word, "salet");
    }

    #[test]
    fn missing_slot_is_empty() {
        let cache = OpeningCache::from_json(r#"{"hard": []}"#).unwrap();
        assert!(cache.for_mode(PlayMode::Normal).is_none());
        assert!(cache.for_mode(PlayMode::Hard).is_none());
    }

    #[test]
    fn invalid_words_dropped() {
        let cache = OpeningCache::from_json(
            r#"{"normal": [{"word": "toolong", "score": 1.0, "isPossibleAnswer": false},
                           {"word": "crane", "score": 0.5, "isPossibleAnswer": true}]}"#,
        )
        .unwrap();
        assert_eq!(cache.normal.len(), 1);
        assert_eq!(cache.normal[0].word, "crane");
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(matches!(
            OpeningCache::from_json("{ not json"),
            Err(CacheError::Json(_))
        ));
    }

    #[test]
    fn missing_file_falls_back() {
        assert!(load_opening_cache("/nonexistent/openings.json").is_none());
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let cache = OpeningCache::from_json(SAMPLE).unwrap();
        let reparsed = OpeningCache::from_json(&cache.to_json().unwrap()).unwrap();
        assert_eq!(cache, reparsed);
    }
}
