//! Display functions for command results

use super::formatters::{colored_guess, score_bar};
use crate::commands::SuggestResult;
use colored::Colorize;

/// Print the ranked guesses for a turn
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Turn {} ({} mode): {} possible answers",
        result.history.len() + 1,
        result.mode,
        result.possible_answers.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for record in &result.history {
        println!("  {}  {}", colored_guess(record), record.pattern().to_emoji());
    }

    if result.recommendations.is_empty() {
        println!(
            "\n{}",
            "❌ No viable guesses. The feedback may be inconsistent.".red().bold()
        );
        return;
    }

    let best = result.recommendations[0].score;
    println!();
    for (rank, rec) in result.recommendations.iter().enumerate() {
        let word = rec.word.to_uppercase();
        let word = if rec.is_possible_answer {
            word.green().bold()
        } else {
            word.normal()
        };
        println!(
            "  {:>2}. {}  [{}] {}",
            rank + 1,
            word,
            score_bar(rec.score, best, 20).green(),
            format!("{:.3} bits", rec.score).bright_yellow()
        );
    }

    println!(
        "\n{}",
        "Green words could still be the answer.".bright_black()
    );
}
