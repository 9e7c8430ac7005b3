//! Candidate-set tiers
//!
//! Full-vocabulary scoring against thousands of possible answers dominates the
//! cost of early turns, so the candidate set shrinks to a curated subset while
//! many answers remain and widens again as the answer set collapses.

use crate::config::AdvisorConfig;
use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letters counted by the high-quality predicate, most frequent first
pub const COMMON_LETTERS: &[u8] = b"earotlisnc";

const VOWELS: &[u8] = b"aeiou";

/// Game rules in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    #[default]
    Normal,
    /// Every guess must be consistent with all feedback so far
    Hard,
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// Which candidate set gets scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Hard mode: every vocabulary word consistent with the history
    Hard,
    /// Many answers remain: high-quality whitelist (or full vocabulary if none loaded)
    Early,
    /// Possible answers plus the top guess-only words
    Mid,
    /// Few answers remain: full vocabulary
    Late,
}

impl Tier {
    /// Pick the tier for a turn
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::config::AdvisorConfig;
    /// use wordle_advisor::pool::{PlayMode, Tier};
    ///
    /// let config = AdvisorConfig::default();
    /// assert_eq!(Tier::select(PlayMode::Normal, 201, &config), Tier::Early);
    /// assert_eq!(Tier::select(PlayMode::Normal, 200, &config), Tier::Mid);
    /// assert_eq!(Tier::select(PlayMode::Normal, 20, &config), Tier::Late);
    /// ```
    #[must_use]
    pub const fn select(mode: PlayMode, remaining: usize, config: &AdvisorConfig) -> Self {
        match mode {
            PlayMode::Hard => Self::Hard,
            PlayMode::Normal => {
                if remaining > config.early_game_threshold {
                    Self::Early
                } else if remaining > config.late_game_threshold {
                    Self::Mid
                } else {
                    Self::Late
                }
            }
        }
    }
}

/// Early-game whitelist predicate
///
/// Every letter unique, and either at least three distinct vowels or at least
/// four letters from [`COMMON_LETTERS`].
#[must_use]
pub fn is_high_quality(word: &Word) -> bool {
    if !word.has_unique_letters() {
        return false;
    }

    let vowels = VOWELS.iter().filter(|&&v| word.has_letter(v)).count();
    let common = COMMON_LETTERS
        .iter()
        .filter(|&&c| word.has_letter(c))
        .count();

    vowels >= 3 || common >= 4
}
