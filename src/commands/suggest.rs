//! Recommendation command
//!
//! Builds an [`Advisor`] from word-list files plus the optional cache
//! snapshots, then ranks guesses for a history given on the command line.

use crate::cache::{load_opening_cache, load_quality_tiers};
use crate::config::AdvisorConfig;
use crate::core::GuessRecord;
use crate::pool::{CandidatePool, PlayMode};
use crate::solver::{Advisor, Recommendation};
use crate::wordlists::loader::{load_from_file, load_used_words};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Files the advisor is assembled from
#[derive(Debug, Clone, Default)]
pub struct AdvisorSources {
    pub answers: PathBuf,
    pub guesses: Option<PathBuf>,
    pub openings: Option<PathBuf>,
    pub tiers: Option<PathBuf>,
    pub used_words: Option<PathBuf>,
    /// Used words from games at or after this id stay answer-eligible
    pub cutoff: Option<u32>,
}

/// Ranked guesses plus the context they were computed in
pub struct SuggestResult {
    pub history: Vec<GuessRecord>,
    pub mode: PlayMode,
    pub possible_answers: usize,
    pub recommendations: Vec<Recommendation>,
}

/// Load word lists and caches into a ready advisor
///
/// Missing or malformed cache snapshots are logged and skipped; word lists
/// and the used-word file are required once named.
///
/// # Errors
///
/// Returns an error if a word list or the used-word file cannot be read.
pub fn build_advisor(sources: &AdvisorSources, config: AdvisorConfig) -> Result<Advisor> {
    let answers = load_from_file(&sources.answers)
        .with_context(|| format!("Failed to read answer list {}", sources.answers.display()))?;
    let guess_only = match &sources.guesses {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read guess list {}", path.display()))?,
        None => Vec::new(),
    };

    let mut pool = CandidatePool::new(answers, guess_only);
    if let Some(tiers) = sources.tiers.as_ref().and_then(load_quality_tiers) {
        pool.set_quality_tiers(&tiers);
    }
    log::info!(
        "Loaded {} words ({} answer-eligible)",
        pool.len(),
        pool.answer_words().count()
    );

    let openings = sources.openings.as_ref().and_then(load_opening_cache);
    let mut advisor = Advisor::new(pool, config).with_opening_cache(openings);

    if let Some(path) = &sources.used_words {
        let index = load_used_words(path)
            .with_context(|| format!("Failed to read used words {}", path.display()))?;
        if index.is_empty() {
            log::warn!("No used words parsed from {}", path.display());
        } else {
            log::info!("Loaded {} used words", index.len());
            advisor.apply_used_words(&index, sources.cutoff);
        }
    }

    Ok(advisor)
}

/// Parse history arguments of the form `crane=GYWWW`
///
/// # Errors
///
/// Returns an error naming the first argument that is not a valid guess record.
pub fn parse_history<S: AsRef<str>>(args: &[S]) -> Result<Vec<GuessRecord>> {
    args.iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.parse::<GuessRecord>()
                .with_context(|| format!("Invalid guess '{arg}' (expected word=FEEDBACK)"))
        })
        .collect()
}

/// Rank the next guesses for `history`
#[must_use]
pub fn suggest(
    advisor: &Advisor,
    history: Vec<GuessRecord>,
    mode: PlayMode,
    top_n: usize,
) -> SuggestResult {
    let possible_answers = advisor.possible_answers(&history).len();
    let recommendations = advisor.recommend(&history, mode, top_n);

    SuggestResult {
        history,
        mode,
        possible_answers,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn advisor() -> Advisor {
        let pool = CandidatePool::new(
            words_from_slice(&["trace", "grace", "brace", "crane", "slate"]),
            words_from_slice(&["soare", "trice"]),
        );
        Advisor::new(pool, AdvisorConfig::default())
    }

    #[test]
    fn parses_history_arguments() {
        let history = parse_history(&["crane=YGGWG", "trice:GGWGG"]).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].guess_text(), "crane");
        assert_eq!(history[1].pattern().to_string(), "GGWGG");
    }

    #[test]
    fn rejects_malformed_history() {
        assert!(parse_history(&["crane"]).is_err());
        assert!(parse_history(&["crane=GXGGG"]).is_err());
        assert!(parse_history(&["cranes=GGGGG"]).is_err());
    }

    #[test]
    fn suggest_reports_remaining_answers() {
        let advisor = advisor();
        let history = parse_history(&["crane=YGGWG"]).unwrap();
        let result = suggest(&advisor, history, PlayMode::Normal, 3);

        assert_eq!(result.possible_answers, 3);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn suggest_solved_history() {
        let advisor = advisor();
        let history = parse_history(&["crane=YGGWG", "trice=GGWGG"]).unwrap();
        let result = suggest(&advisor, history, PlayMode::Hard, 5);

        assert_eq!(result.possible_answers, 1);
        assert_eq!(result.recommendations[0].word, "trace");
        assert!((result.recommendations[0].score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_answer_list_is_an_error() {
        let sources = AdvisorSources {
            answers: PathBuf::from("/nonexistent/answers.txt"),
            ..AdvisorSources::default()
        };
        assert!(build_advisor(&sources, AdvisorConfig::default()).is_err());
    }
}
