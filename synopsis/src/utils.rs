// src/utils.rs
use clap::ValueEnum as _;
use std::io::{self, Write};

use crate::core::pipeline::SummaryOutcome;
use crate::error::SummarizeError;
use crate::models::{ComparisonResult, ModelChoice, SessionCounters, TextStats};

/// Formats `value` with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn grouped(value: usize) -> String {
    group_thousands(u64::try_from(value).unwrap_or(u64::MAX))
}

pub fn print_stats(out: &mut dyn Write, stats: &TextStats, reading_minutes: u64) -> io::Result<()> {
    writeln!(
        out,
        "Words: {} | Characters: {} | Sentences: {} | Paragraphs: {} | Reading time: ~{reading_minutes} min",
        grouped(stats.words),
        grouped(stats.characters),
        stats.sentences,
        stats.paragraphs,
    )
}

pub fn print_comparison(out: &mut dyn Write, comparison: &ComparisonResult) -> io::Result<()> {
    let (original, summary) = (&comparison.original, &comparison.summary);
    writeln!(out, "{:<12}{:>12}{:>12}", "", "Original", "Summary")?;
    writeln!(out, "{:<12}{:>12}{:>12}", "Words", original.words, summary.words)?;
    writeln!(
        out,
        "{:<12}{:>12}{:>12}",
        "Characters", original.characters, summary.characters
    )?;
    writeln!(
        out,
        "{:<12}{:>12}{:>12}",
        "Sentences", original.sentences, summary.sentences
    )?;
    writeln!(out, "Compression: {:.1}%", comparison.compression_ratio)
}

pub fn print_outcome(out: &mut dyn Write, outcome: &SummaryOutcome) -> io::Result<()> {
    writeln!(out, "Summary ({}):", outcome.model.label())?;
    writeln!(out, "{}", outcome.summary)?;
    writeln!(out)?;
    print_comparison(out, &outcome.comparison)
}

pub fn print_counters(out: &mut dyn Write, counters: &SessionCounters) -> io::Result<()> {
    writeln!(out, "Summaries created: {}", group_thousands(counters.summaries_created))?;
    writeln!(
        out,
        "Characters processed: {}",
        group_thousands(counters.characters_processed)
    )
}

pub fn print_models(out: &mut dyn Write) -> io::Result<()> {
    for model in ModelChoice::ALL {
        let name = model
            .to_possible_value()
            .map(|value| value.get_name().to_owned())
            .unwrap_or_default();
        writeln!(out, "{name:<12} {:<16} {}", model.label(), model.model_id())?;
    }
    Ok(())
}

/// Warnings for rejected input, errors (plus a hint when there is one) for
/// everything else.
pub fn print_failure(out: &mut dyn Write, error: &SummarizeError) -> io::Result<()> {
    if error.is_input_warning() {
        return writeln!(out, "Warning: {error}");
    }
    writeln!(out, "Error: {error}")?;
    if let Some(remedy) = error.remedy() {
        writeln!(out, "Hint: {remedy}")?;
    }
    Ok(())
}
