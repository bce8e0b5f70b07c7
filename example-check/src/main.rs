//! example-check CLI
//!
//! Runs the built-in suites and exits with the number of failed cases.
//! Harness errors such as an unknown suite exit with status 2.

use std::process::ExitCode;

use clap::Parser;
use example_check::{checks, RunReport};

#[derive(Parser)]
#[command(name = "example-check")]
#[command(about = "Run the example provider checks")]
#[command(version)]
struct Cli {
    /// Only run the named suite
    #[arg(long)]
    suite: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Exit status for errors in the harness itself, as opposed to failed cases.
const HARNESS_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(HARNESS_ERROR)
        }
    }
}

fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();
    example::logging::init();

    let suites = checks::select(cli.suite.as_deref())?;
    let report = RunReport::run(&suites);
    tracing::info!(
        cases = report.case_count(),
        failed = report.failed_count(),
        "check run complete"
    );

    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(report.exit_code())
}
