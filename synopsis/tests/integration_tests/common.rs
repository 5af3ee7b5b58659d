// tests/integration_tests/common.rs
use anyhow::Result;
use std::cell::Cell;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use synopsis::{ModelError, SummarizationParameters, SummarizationService};

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

/// A text of `count` distinct words, one sentence every ten words.
pub fn article(count: usize) -> String {
    let mut text = String::new();
    for i in 1..=count {
        text.push_str(&format!("token{i}"));
        text.push(if i % 10 == 0 { '.' } else { ' ' });
        if i % 10 == 0 && i < count {
            text.push(' ');
        }
    }
    text
}

/// Summarizes by keeping the first `keep` words of the input.
pub struct Truncating {
    pub keep: usize,
    pub calls: Cell<usize>,
}

impl Truncating {
    pub fn new(keep: usize) -> Self {
        Self {
            keep,
            calls: Cell::new(0),
        }
    }
}

impl SummarizationService for Truncating {
    fn summarize(
        &self,
        _model_id: &str,
        text: &str,
        _parameters: &SummarizationParameters,
    ) -> Result<String, ModelError> {
        self.calls.set(self.calls.get() + 1);
        Ok(text
            .split_whitespace()
            .take(self.keep)
            .collect::<Vec<_>>()
            .join(" "))
    }
}

pub struct Broken(pub ModelError);

impl SummarizationService for Broken {
    fn summarize(
        &self,
        _model_id: &str,
        _text: &str,
        _parameters: &SummarizationParameters,
    ) -> Result<String, ModelError> {
        Err(self.0.clone())
    }
}
