//! Command-line driver comparing the key structure of two localization files.
//!
//! `keydiff REFERENCE [TARGET]` loads both documents, reports entry counts and
//! lists the keys the target lacks (`M`) or adds (`E`). When TARGET is omitted
//! it is read from STDIN.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use keydiff_core::{Node, RenderConfig, Report, DEFAULT_LIMIT};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Exit status for runs that finished but found missing keys under `--strict`.
const EXIT_MISSING: i32 = 1;
/// Exit status for fatal errors (unreadable input, malformed documents).
const EXIT_FAILURE: i32 = 2;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "keydiff",
    version,
    about = "Report keys missing from or extra in a translation relative to a reference locale."
)]
struct Cli {
    /// Reference document (e.g. en.json).
    reference: PathBuf,

    /// Target document (e.g. ar.json). Read from STDIN when omitted.
    target: Option<PathBuf>,

    /// Parse both documents as YAML instead of JSON.
    #[arg(long = "yaml", action = ArgAction::SetTrue)]
    yaml: bool,

    /// Report format (`text` or `json`).
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Paths listed per category in text output; 0 lists everything.
    #[arg(short = 'l', long = "limit", default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Render `M`/`E` markers using ANSI colors.
    #[arg(long = "color", action = ArgAction::SetTrue)]
    color: bool,

    /// Exit with status 1 when the target is missing keys.
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Write the report to FILE instead of STDOUT.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err:#}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<i32> {
    let reference_source = InputSource::File(cli.reference.clone());
    let target_source = match &cli.target {
        Some(path) => InputSource::File(path.clone()),
        None => InputSource::Stdin,
    };

    let reference = load(&reference_source, cli.yaml, "reference")?;
    let target = load(&target_source, cli.yaml, "target")?;

    let report = Report::compare(&reference, &target);
    info!(
        reference_entries = report.reference_entries(),
        target_entries = report.target_entries(),
        missing = report.diff().missing().len(),
        extra = report.diff().extra().len(),
        "comparison finished"
    );

    let rendered = match cli.format {
        OutputFormat::Text => {
            let config = RenderConfig::new().with_limit(cli.limit).with_color(cli.color);
            report.render(&config)
        }
        OutputFormat::Json => {
            let mut json = report.render_json().context("failed to serialize report")?;
            json.push('\n');
            json
        }
    };

    if let Some(path) = &cli.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("failed to write output to {}", path.display()))?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes()).context("failed to write report")?;
        stdout.flush().ok();
    }

    let code = if cli.strict && !report.diff().missing().is_empty() { EXIT_MISSING } else { 0 };
    Ok(code)
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::File(path) => {
            if path.as_os_str().is_empty() {
                bail!("expected file path; got empty string");
            }
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read STDIN")?;
            Ok(buffer)
        }
    }
}

fn load(source: &InputSource, yaml: bool, role: &str) -> Result<Node> {
    let text = read_input(source)?;
    debug!(source = %source.describe(), bytes = text.len(), yaml, "loaded document");
    let parsed = if yaml { Node::from_yaml_str(&text) } else { Node::from_json_str(&text) };
    parsed.with_context(|| format!("failed to parse {role} document {}", source.describe()))
}

#[cfg(test)]
mod tests {
    use super::{Cli, OutputFormat};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_report_conventions() {
        let cli = Cli::parse_from(["keydiff", "en.json", "ar.json"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.limit, 100);
        assert!(!cli.strict);
        assert!(!cli.yaml);
        assert_eq!(cli.target.as_deref(), Some(std::path::Path::new("ar.json")));
    }

    #[test]
    fn target_is_optional() {
        let cli = Cli::parse_from(["keydiff", "en.json"]);
        assert!(cli.target.is_none());
    }

    #[test]
    fn verbosity_accumulates() {
        let cli = Cli::parse_from(["keydiff", "-vv", "--format", "json", "en.json"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
