//! Offline snapshot generation
//!
//! Computes the opening cache and quality tiers that `suggest` consumes and
//! writes them as JSON.

use crate::solver::Advisor;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

fn scoring_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} candidates scored ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Candidate count per mode depends on the loaded tiers, so no length is shown
fn scoring_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} candidates scored | {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb
}

fn write_snapshot(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Generate the opening cache for both play modes
///
/// Writes to `output`, or stdout when absent.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn generate_openings(advisor: &Advisor, top_n: usize, output: Option<&Path>) -> Result<()> {
    let pb = scoring_spinner();
    let openings = advisor.generate_opening_cache_with_progress(top_n, || pb.inc(1));
    pb.finish_with_message("Complete!");

    let json = openings.to_json().context("Failed to serialize opening cache")?;
    write_snapshot(&json, output)
}

/// Generate quality tiers from the full vocabulary
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn generate_tiers(advisor: &Advisor, top_guess_only: usize, output: Option<&Path>) -> Result<()> {
    let pb = scoring_progress(advisor.pool().len());
    let tiers = advisor.generate_quality_tiers_with_progress(top_guess_only, || pb.inc(1));
    pb.finish_with_message("Complete!");

    let json = tiers.to_json().context("Failed to serialize quality tiers")?;
    write_snapshot(&json, output)
}
