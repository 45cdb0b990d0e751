use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fidelity_core::{CheckOptions, ConsoleReport, FidelityChecker, JsonReport};

/// Arguments of the fidelity check
#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Path to source markdown file
    pub source: PathBuf,

    /// Path to target .ipynb file
    pub notebook: PathBuf,

    /// Skip source chunks shorter than this after normalization
    #[arg(long, default_value_t = 5)]
    pub min_chunk_len: usize,

    /// Lines of each missing chunk to show
    #[arg(long, default_value_t = 5)]
    pub preview_lines: usize,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl VerifyArgs {
    pub fn options(&self) -> CheckOptions {
        CheckOptions {
            min_chunk_len: self.min_chunk_len,
            preview_lines: self.preview_lines,
        }
    }
}

/// Run the check and write the report to `out`
///
/// Returns the verdict. I/O and parse failures come back as errors after
/// the header has been written.
pub fn run<W: Write>(args: &VerifyArgs, out: &mut W) -> Result<bool> {
    let source_label = args.source.display().to_string();
    let notebook_label = args.notebook.display().to_string();
    let options = args.options();

    if !args.json {
        write!(out, "{}", ConsoleReport::header(&source_label, &notebook_label)?)?;
    }

    let result = FidelityChecker::new(options).check_files(&args.source, &args.notebook)?;

    if args.json {
        writeln!(
            out,
            "{}",
            JsonReport::format(&source_label, &notebook_label, &result)?
        )?;
    } else {
        write!(out, "{}", ConsoleReport::results(&result, options.preview_lines)?)?;
    }
    out.flush()?;

    Ok(result.passed())
}
