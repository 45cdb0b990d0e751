//! Notebook authoring toolbox

use std::process::ExitCode;

use clap::Parser;
use notebook_cli::commands::{self, Command};

#[derive(Parser, Debug)]
#[command(name = "nbtool")]
#[command(version, about = "Inspect, patch and verify course notebooks")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    notebook_cli::init_tracing(cli.verbose);

    match commands::run(&cli.command, &mut std::io::stdout()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
