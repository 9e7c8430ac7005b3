//! Engine tunables
//!
//! Thresholds use cascading `>` comparisons on the number of possible answers:
//! ```text
//! if remaining > early_game_threshold      → Early (quality-tier candidates)
//! else if remaining > late_game_threshold  → Mid   (possible answers + top guess-only words)
//! else                                     → Late  (full vocabulary)
//! ```

/// Configuration for the recommendation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Possible answers evaluated per entropy score; larger sets are sampled (default: 500)
    pub sample_size: usize,

    /// Remaining answers > this use the early-game tier (default: 200)
    pub early_game_threshold: usize,

    /// Remaining answers > this (and not early) use the mid-game tier (default: 20)
    pub late_game_threshold: usize,

    /// Recommendations returned when the caller has no preference (default: 10)
    pub top_n: usize,
}

impl AdvisorConfig {
    #[must_use]
    pub const fn new(
        sample_size: usize,
        early_game_threshold: usize,
        late_game_threshold: usize,
        top_n: usize,
    ) -> Self {
        Self {
            sample_size,
            early_game_threshold,
            late_game_threshold,
            top_n,
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self::new(500, 200, 20, 10)
    }
}
