//! Quality-tier word sets used by the early- and mid-game candidate tiers

use super::CacheError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Curated candidate subsets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityTiers {
    /// Early-game candidates, best first
    #[serde(default)]
    pub high_quality: Vec<String>,
    /// Guess-only words added to the mid-game candidate set
    #[serde(default)]
    pub top_guess_only: Vec<String>,
}

impl QualityTiers {
    /// # Errors
    /// Returns `CacheError::Json` if the text is not a valid tier document.
    pub fn from_json(text: &str) -> Result<Self, CacheError> {
        Ok(serde_json::from_str(text)?)
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

/// Load quality tiers, logging and returning `None` on any failure
///
/// Without tiers the engine scores the full vocabulary early in the game.
pub fn load_quality_tiers(path: impl AsRef<Path>) -> Option<QualityTiers> {
    let path = path.as_ref();
    match QualityTiers::load(path) {
        Ok(tiers) => {
            log::info!(
                "Loaded quality tiers from {} ({} high-quality, {} top guess-only)",
                path.display(),
                tiers.high_quality.len(),
                tiers.top_guess_only.len()
            );
            Some(tiers)
        }
        Err(e) => {
            log::warn!(
                "Ignoring quality tiers {}: {e}; using the full vocabulary",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_slots() {
        let tiers = QualityTiers::from_json(
            r#"{"highQuality": ["slate", "crane"], "topGuessOnly": ["soare"]}"#,
        )
        .unwrap();
        assert_eq!(tiers.high_quality, vec!["slate", "crane"]);
        assert_eq!(tiers.top_guess_only, vec!["soare"]);
    }

    #[test]
    fn missing_slots_default_empty() {
        let tiers = QualityTiers::from_json("{}").unwrap();
        assert!(tiers.high_quality.is_empty());
        assert!(tiers.top_guess_only.is_empty());
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(QualityTiers::from_json(r#"{"highQuality": 7}"#).is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        assert!(load_quality_tiers("/nonexistent/tiers.json").is_none());
    }
}
