// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use serde::Serialize;
use std::env;
use std::fs;
use std::io::{self, BufRead, Read as _, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::config::Config;
use crate::core::analyzer::{analyze, estimate_reading_time};
use crate::core::pipeline::{SummaryOutcome, summarize};
use crate::core::report::write_report;
use crate::core::request::{build_parameters, validate};
use crate::core::samples::Sample;
use crate::core::service::{SummarizationService, connect};
use crate::models::{
    GenerationSettings, ModelChoice, SessionCounters, SummarizationParameters, TextStats,
    ValidationOutcome,
};
use crate::shell::Shell;
use crate::utils::{print_counters, print_failure, print_models, print_outcome, print_stats};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text files to summarize (reads stdin when no file or sample is given)
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,

    /// Use a built-in sample text as input
    #[arg(long, value_enum, conflicts_with = "files")]
    pub sample: Option<Sample>,

    /// Show text statistics only, without summarizing
    #[arg(short, long)]
    pub stats: bool,

    /// List the available models
    #[arg(short, long)]
    pub list_models: bool,

    /// Validate input and print the request parameters without calling the model
    #[arg(long)]
    pub dry_run: bool,

    /// Start an interactive session
    #[arg(short, long, conflicts_with_all = ["files", "sample"])]
    pub interactive: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Summarization model
    #[arg(short, long, value_enum)]
    pub model: Option<ModelChoice>,

    /// Maximum summary length in tokens (50-500)
    #[arg(long)]
    pub max_length: Option<u32>,

    /// Minimum summary length in tokens (10-100)
    #[arg(long)]
    pub min_length: Option<u32>,

    /// Sample the output instead of decoding greedily
    #[arg(long, overrides_with = "no_sampling")]
    pub sampling: bool,

    /// Decode greedily even when the config file enables sampling
    #[arg(long, overrides_with = "sampling")]
    pub no_sampling: bool,

    /// Sampling temperature (0.1-2.0, only used with --sampling)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Nucleus sampling top-p (0.1-1.0, only used with --sampling)
    #[arg(long)]
    pub top_p: Option<f64>,

    /// Write a plain-text report for every summary into this directory
    #[arg(short, long)]
    pub report_dir: Option<PathBuf>,

    /// Config file (defaults to the nearest .synopsis.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Whether this invocation talks to a summarization backend.
    #[must_use]
    pub const fn needs_model(&self) -> bool {
        !(self.list_models || self.stats || self.dry_run)
    }

    /// Generation settings from `config`, overridden by any flags given.
    #[must_use]
    pub fn settings(&self, config: &Config) -> GenerationSettings {
        let base = config.generation;
        GenerationSettings {
            max_length: self.max_length.unwrap_or(base.max_length),
            min_length: self.min_length.unwrap_or(base.min_length),
            sampling: self.sampling_override().unwrap_or(base.sampling),
            temperature: self.temperature.unwrap_or(base.temperature),
            top_p: self.top_p.unwrap_or(base.top_p),
        }
    }

    const fn sampling_override(&self) -> Option<bool> {
        match (self.sampling, self.no_sampling) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    #[must_use]
    pub fn model(&self, config: &Config) -> ModelChoice {
        self.model.unwrap_or(config.model)
    }
}

#[derive(Debug)]
struct Input {
    name: String,
    text: String,
}

#[derive(Serialize)]
struct StatsReport<'a> {
    name: &'a str,
    stats: TextStats,
    reading_minutes: u64,
}

#[derive(Serialize)]
struct DryRunReport<'a> {
    model_id: &'a str,
    parameters: SummarizationParameters,
    inputs: Vec<DryRunInput<'a>>,
}

#[derive(Serialize)]
struct DryRunInput<'a> {
    name: &'a str,
    words: usize,
    accepted: bool,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    outcome: &'a SummaryOutcome,
    report: Option<PathBuf>,
}

/// Entry point used by the binary: resolves the config, connects the
/// backend when one is needed and runs against stdin/stdout.
///
/// # Errors
///
/// Fails if the config cannot be loaded, an input cannot be read, the
/// backend cannot be set up, or any input could not be summarized.
pub fn run(args: Args) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = Config::resolve(args.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    debug!(?config, "resolved configuration");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.needs_model() {
        let service = connect(&config).context("Failed to set up summarization backend")?;
        run_with(&args, &config, Some(service.as_ref()), &mut input, &mut out)
    } else {
        run_with(&args, &config, None, &mut input, &mut out)
    }
}

/// Runs `args` against explicit input, output and backend.
///
/// # Errors
///
/// See [`run`]. Summarization modes also fail when `service` is `None`.
pub fn run_with(
    args: &Args,
    config: &Config,
    service: Option<&dyn SummarizationService>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    if args.list_models {
        print_models(out)?;
        return Ok(());
    }

    let model = args.model(config);
    let settings = args.settings(config);

    if args.interactive {
        let service = service.context("Interactive mode needs a summarization backend")?;
        let mut shell = Shell::new(service, model, settings).with_report_dir(args.report_dir.clone());
        return shell.run(input, out);
    }

    let inputs = read_inputs(args, input)?;

    if args.stats {
        show_stats(args, &inputs, out)
    } else if args.dry_run {
        dry_run(args, model, &settings, &inputs, out)
    } else {
        let service = service.context("Summarizing needs a summarization backend")?;
        summarize_all(args, service, model, &settings, &inputs, out)
    }
}

fn read_inputs(args: &Args, stdin: &mut dyn BufRead) -> Result<Vec<Result<Input>>> {
    if let Some(sample) = args.sample {
        return Ok(vec![Ok(Input {
            name: sample.title().to_owned(),
            text: sample.text().to_owned(),
        })]);
    }

    if args.files.is_empty() {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        return Ok(vec![Ok(Input {
            name: String::from("stdin"),
            text,
        })]);
    }

    Ok(args.files.iter().map(|path| read_file(path)).collect())
}

fn read_file(path: &Path) -> Result<Input> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(Input {
        name: path.display().to_string(),
        text,
    })
}

/// Reports a failure that is not a [`SummarizeError`]; JSON output stays
/// parseable by sending it to the log instead.
fn report_error(args: &Args, out: &mut dyn Write, error: &anyhow::Error) -> io::Result<()> {
    if args.json {
        error!("{error:#}");
        Ok(())
    } else {
        writeln!(out, "Error: {error:#}")
    }
}

fn finish(failed: usize, total: usize, action: &str) -> Result<()> {
    if failed > 0 {
        bail!("{failed} of {total} inputs could not be {action}");
    }
    Ok(())
}

fn show_stats(args: &Args, inputs: &[Result<Input>], out: &mut dyn Write) -> Result<()> {
    let mut failed: usize = 0;
    let mut reports = Vec::new();

    for input in inputs {
        let input = match input {
            Ok(input) => input,
            Err(error) => {
                failed = failed.saturating_add(1);
                report_error(args, out, error)?;
                continue;
            }
        };

        if args.json {
            reports.push(StatsReport {
                name: &input.name,
                stats: analyze(&input.text),
                reading_minutes: estimate_reading_time(&input.text),
            });
        } else {
            writeln!(out, "== {} ==", input.name)?;
            print_stats(out, &analyze(&input.text), estimate_reading_time(&input.text))?;
        }
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
    }
    finish(failed, inputs.len(), "read")
}

fn dry_run(
    args: &Args,
    model: ModelChoice,
    settings: &GenerationSettings,
    inputs: &[Result<Input>],
    out: &mut dyn Write,
) -> Result<()> {
    let parameters = build_parameters(settings).context("Invalid generation settings")?;
    let mut failed: usize = 0;
    let mut checked = Vec::new();

    for input in inputs {
        match input {
            Ok(input) => checked.push(DryRunInput {
                name: &input.name,
                words: analyze(&input.text).words,
                accepted: validate(&input.text) == ValidationOutcome::Ok,
            }),
            Err(error) => {
                failed = failed.saturating_add(1);
                report_error(args, out, error)?;
            }
        }
    }

    let report = DryRunReport {
        model_id: model.model_id(),
        parameters,
        inputs: checked,
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "Model: {model} ({})", report.model_id)?;
        writeln!(out, "Parameters: {}", serde_json::to_string(&report.parameters)?)?;
        for input in &report.inputs {
            let verdict = if input.accepted { "ok" } else { "rejected" };
            writeln!(out, "{}: {} words, {verdict}", input.name, input.words)?;
        }
    }
    finish(failed, inputs.len(), "read")
}

fn summarize_all(
    args: &Args,
    service: &dyn SummarizationService,
    model: ModelChoice,
    settings: &GenerationSettings,
    inputs: &[Result<Input>],
    out: &mut dyn Write,
) -> Result<()> {
    let mut counters = SessionCounters::new();
    let mut failed: usize = 0;
    let mut reports = Vec::new();

    for input in inputs {
        let input = match input {
            Ok(input) => input,
            Err(error) => {
                failed = failed.saturating_add(1);
                report_error(args, out, error)?;
                continue;
            }
        };

        if !args.json {
            writeln!(out, "== {} ==", input.name)?;
            print_stats(out, &analyze(&input.text), estimate_reading_time(&input.text))?;
        }

        let outcome = match summarize(service, model, &input.text, settings, &mut counters) {
            Ok(outcome) => outcome,
            Err(error) => {
                failed = failed.saturating_add(1);
                if args.json {
                    error!(input = %input.name, %error, "summarization failed");
                } else {
                    print_failure(out, &error)?;
                }
                continue;
            }
        };

        let written = args
            .report_dir
            .as_deref()
            .map(|dir| write_report(dir, &input.text, &outcome));
        if !args.json {
            print_outcome(out, &outcome)?;
        }

        let report = match written {
            Some(Ok(path)) => Some(path),
            Some(Err(error)) => {
                failed = failed.saturating_add(1);
                report_error(args, out, &error)?;
                None
            }
            None => None,
        };

        if args.json {
            reports.push((input, outcome, report));
        } else {
            if let Some(path) = &report {
                writeln!(out, "Report written to {}", path.display())?;
            }
            writeln!(out)?;
        }
    }

    if args.json {
        let reports: Vec<SummaryReport<'_>> = reports
            .iter()
            .map(|(input, outcome, report)| SummaryReport {
                name: &input.name,
                outcome,
                report: report.clone(),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
    } else if inputs.len() > 1 {
        print_counters(out, &counters)?;
    }

    finish(failed, inputs.len(), "summarized")
}
