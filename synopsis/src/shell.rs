// src/shell.rs
use anyhow::Result;
use clap::ValueEnum as _;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::core::analyzer::{analyze, reading_minutes};
use crate::core::pipeline::summarize;
use crate::core::report::write_report;
use crate::core::service::SummarizationService;
use crate::models::{GenerationSettings, ModelChoice, SessionCounters};
use crate::utils::{print_counters, print_failure, print_models, print_outcome, print_stats};

const HELP: &str = "\
Type or paste text, then enter :go to summarize it.
Start a text line with :: to keep a literal leading colon.
  :go              summarize the text entered so far
  :stats           show statistics for the text entered so far
  :clear           discard the text entered so far
  :model [NAME]    show or switch the model
  :models          list available models
  :counters        show session statistics
  :reset           reset session statistics
  :help            show this help
  :quit            leave the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented interactive session.
///
/// Text lines are buffered (blank lines included, they separate paragraphs)
/// until `:go`; lines starting with a single `:` are commands and `::`
/// escapes a literal leading colon. Reaching the end of
/// input summarizes whatever is still buffered. Failures are reported and
/// the session carries on.
pub struct Shell<'a> {
    service: &'a dyn SummarizationService,
    model: ModelChoice,
    settings: GenerationSettings,
    report_dir: Option<PathBuf>,
    counters: SessionCounters,
    buffer: String,
}

impl<'a> Shell<'a> {
    #[must_use]
    pub fn new(
        service: &'a dyn SummarizationService,
        model: ModelChoice,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            service,
            model,
            settings,
            report_dir: None,
            counters: SessionCounters::new(),
            buffer: String::new(),
        }
    }

    #[must_use]
    pub fn with_report_dir(mut self, report_dir: Option<PathBuf>) -> Self {
        self.report_dir = report_dir;
        self
    }

    #[must_use]
    pub const fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    #[must_use]
    pub const fn model(&self) -> ModelChoice {
        self.model
    }

    /// Runs the session until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O errors on `input` or `out` end the session early.
    pub fn run(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "synopsis interactive session, model: {}", self.model)?;
        writeln!(out, "{HELP}")?;

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                if !self.buffer.trim().is_empty() {
                    self.submit(out)?;
                }
                break;
            }

            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(literal) = line.strip_prefix("::") {
                self.buffer.push(':');
                self.buffer.push_str(literal);
                self.buffer.push('\n');
                continue;
            }
            if line.starts_with(':') {
                if self.command(line, out)? == Flow::Quit {
                    break;
                }
                continue;
            }

            self.buffer.push_str(line);
            self.buffer.push('\n');
        }

        writeln!(out, "Session finished.")?;
        print_counters(out, &self.counters)?;
        Ok(())
    }

    fn command(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let argument = parts.next();

        match name {
            ":go" => self.submit(out)?,
            ":stats" => {
                let stats = analyze(&self.buffer);
                print_stats(out, &stats, reading_minutes(stats.words))?;
            }
            ":clear" => {
                self.buffer.clear();
                writeln!(out, "Input cleared.")?;
            }
            ":model" => match argument {
                None => writeln!(out, "Model: {} ({})", self.model, self.model.model_id())?,
                Some(requested) => match ModelChoice::from_str(requested, true) {
                    Ok(model) => {
                        self.model = model;
                        writeln!(out, "Model: {} ({})", model, model.model_id())?;
                    }
                    Err(_) => writeln!(out, "Unknown model: {requested} (see :models)")?,
                },
            },
            ":models" => print_models(out)?,
            ":counters" => print_counters(out, &self.counters)?,
            ":reset" => {
                self.counters.reset();
                writeln!(out, "Session statistics reset.")?;
            }
            ":help" => writeln!(out, "{HELP}")?,
            ":quit" | ":q" => return Ok(Flow::Quit),
            other => writeln!(out, "Unknown command: {other} (type :help)")?,
        }
        Ok(Flow::Continue)
    }

    fn submit(&mut self, out: &mut dyn Write) -> Result<()> {
        let text = std::mem::take(&mut self.buffer);
        let stats = analyze(&text);
        print_stats(out, &stats, reading_minutes(stats.words))?;

        match summarize(
            self.service,
            self.model,
            &text,
            &self.settings,
            &mut self.counters,
        ) {
            Ok(outcome) => {
                print_outcome(out, &outcome)?;
                if let Some(dir) = &self.report_dir {
                    match write_report(dir, &text, &outcome) {
                        Ok(path) => writeln!(out, "Report written to {}", path.display())?,
                        Err(error) => writeln!(out, "Error: {error:#}")?,
                    }
                }
            }
            Err(error) => print_failure(out, &error)?,
        }
        Ok(())
    }
}
