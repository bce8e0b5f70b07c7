use std::io;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "example")]
#[command(about = "Print the code token followed by the primary and secondary counters")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    example::logging::init();

    let stdout = io::stdout();
    example::write_line(&mut stdout.lock())
}
