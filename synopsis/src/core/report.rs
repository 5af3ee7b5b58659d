// src/core/report.rs
use anyhow::{Context as _, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::pipeline::SummaryOutcome;

const RULE_WIDTH: usize = 50;

/// Renders the downloadable plain-text report for one summary.
///
/// The layout is meant for people, not for parsing back.
#[must_use]
pub fn render_report(original: &str, outcome: &SummaryOutcome) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "TEXT SUMMARY\n{rule}\n\n\
         Original text ({original_words} words):\n{original}\n\n\
         {rule}\n\n\
         Summary ({summary_words} words):\n{summary}\n\n\
         {rule}\n\
         Generated with synopsis\n\
         Date: {date}",
        original_words = outcome.comparison.original.words,
        summary_words = outcome.comparison.summary.words,
        summary = outcome.summary,
        date = outcome.created_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

#[must_use]
pub fn report_file_name(created_at: &NaiveDateTime) -> String {
    format!("summary_{}.txt", created_at.format("%Y%m%d_%H%M%S"))
}

/// Writes the report into `dir` and returns its path.
///
/// Reports created within the same second get a numeric suffix instead of
/// overwriting each other.
///
/// # Errors
///
/// This function may return an error if:
/// * `dir` cannot be created
/// * The report file cannot be written
pub fn write_report(dir: &Path, original: &str, outcome: &SummaryOutcome) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;

    let file_name = report_file_name(&outcome.created_at);
    let mut path = dir.join(&file_name);
    let mut attempt: u32 = 1;
    while path.exists() {
        attempt = attempt.saturating_add(1);
        let stem = file_name.trim_end_matches(".txt");
        path = dir.join(format!("{stem}_{attempt}.txt"));
    }

    fs::write(&path, render_report(original, outcome))
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(path)
}
