//! Notebook fidelity checker
//!
//! Verifies that a notebook contains all text from its source markdown.
//! Exit code 0 when every chunk is found, 1 otherwise or on error.

use std::process::ExitCode;

use clap::Parser;
use notebook_cli::verify::{self, VerifyArgs};

#[derive(Parser, Debug)]
#[command(name = "verify-notebook-fidelity")]
#[command(
    version,
    about = "Verify notebook contains all text from source markdown."
)]
struct Cli {
    #[command(flatten)]
    verify: VerifyArgs,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    notebook_cli::init_tracing(cli.verbose);

    match verify::run(&cli.verify, &mut std::io::stdout()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
