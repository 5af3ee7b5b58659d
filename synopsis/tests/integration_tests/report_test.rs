// tests/integration_tests/report_test.rs
use super::common::{Truncating, article};
use anyhow::Result;
use std::fs;
use synopsis::{
    GenerationSettings, ModelChoice, SessionCounters, render_report, summarize, write_report,
};
use tempfile::TempDir;

#[test]
fn test_report_round_up() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let service = Truncating::new(10);
    let mut counters = SessionCounters::new();
    let text = article(50);
    let outcome = summarize(
        &service,
        ModelChoice::Bart,
        &text,
        &GenerationSettings::default(),
        &mut counters,
    )?;

    let path = write_report(temp_dir.path(), &text, &outcome)?;
    let written = fs::read_to_string(&path)?;

    assert_eq!(written, render_report(&text, &outcome));
    assert!(written.contains("Original text (50 words):"));
    assert!(written.contains("Summary (10 words):"));
    assert_eq!(written.matches(&"=".repeat(50)).count(), 3);
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    assert!(file_name.starts_with("summary_") && file_name.ends_with(".txt"));
    Ok(())
}
