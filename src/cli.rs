//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use covgate::config::{DEFAULT_COVERAGE_PATH, DEFAULT_LIMITS_PATH, Mode, RunConfig};
use covgate::output::{ErrorReport, OutputMode, RunSummary};
use covgate::runner::{self, EXIT_FAILURE, RunReport};
use covgate::GateError;

/// covgate - Assert that unit test coverage never drops below recorded limits
#[derive(Parser, Debug)]
#[command(
    name = "covgate",
    version,
    about = "Assert that unit test coverage never drops below recorded limits",
    long_about = "Compare a `go test -cover` report against per-package coverage limits.\n\n\
                  By default any package below its limit fails the run.\n\
                  With --update, limits are raised to any higher current coverage."
)]
pub struct Cli {
    /// Raise the limits file to any current higher unit test coverage
    #[arg(long)]
    pub update: bool,

    /// Path to the file containing lower bounds for unit test coverage
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LIMITS_PATH)]
    pub limits: PathBuf,

    /// Path to the coverage report (e.g. `go test ./... -cover > coverage.txt`)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_COVERAGE_PATH)]
    pub coverage: PathBuf,

    /// Report insufficient coverage without exiting with status 1
    #[arg(long)]
    pub bypass: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build the run configuration from the parsed flags
    #[must_use]
    pub fn to_config(&self) -> RunConfig {
        RunConfig {
            limits: self.limits.clone(),
            coverage: self.coverage.clone(),
            mode: if self.update { Mode::Update } else { Mode::Assert },
            bypass: self.bypass,
        }
    }

    /// Output mode selected by the flags
    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        if self.json { OutputMode::Json } else { OutputMode::Human }
    }
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output_mode = cli.output_mode();

    match execute(&cli.to_config()) {
        Ok(report) => {
            RunSummary::from(&report).render(output_mode);
            ExitCode::from(report.exit_status())
        },
        Err(err) => {
            let kind = err.downcast_ref::<GateError>().map(|e| e.kind().to_string());
            ErrorReport::new(kind, format!("{err:#}")).render(output_mode);
            ExitCode::from(EXIT_FAILURE)
        },
    }
}

fn execute(config: &RunConfig) -> anyhow::Result<RunReport> {
    let report = runner::run(config).context("coverage gate aborted")?;
    Ok(report)
}
