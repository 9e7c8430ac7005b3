//! Formatting utilities for terminal output

use crate::core::{GuessRecord, LetterState};
use colored::Colorize;

/// Render a guess with each letter tinted by its feedback
#[must_use]
pub fn colored_guess(record: &GuessRecord) -> String {
    record
        .slots()
        .map(|(_, letter, state)| {
            let tile = format!(" {} ", char::from(letter).to_ascii_uppercase());
            match state {
                LetterState::Green => tile.black().on_green().to_string(),
                LetterState::Yellow => tile.black().on_yellow().to_string(),
                LetterState::White => tile.white().on_bright_black().to_string(),
                LetterState::None => tile.dimmed().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score as a bar relative to the best score in the list
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    create_progress_bar(score, best, width)
}
