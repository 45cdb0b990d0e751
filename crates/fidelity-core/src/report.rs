//! Fidelity report formatting
//!
//! The console format is meant for an author fixing a notebook by hand: it
//! names both inputs, gives the counts, and previews every missing chunk so
//! the matching section of the source can be located.

use anyhow::Result;
use std::fmt::Write;

use crate::verify::VerificationResult;

const RULE: &str = "------------------------------------------------------------";

/// Human-readable report
pub struct ConsoleReport;

impl ConsoleReport {
    /// Header naming the two inputs; printed before the check runs
    pub fn header(source: &str, notebook: &str) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Checking fidelity...")?;
        writeln!(output, "Source:   {}", source)?;
        writeln!(output, "Notebook: {}", notebook)?;
        Ok(output)
    }

    /// Counts, then a preview of each missing chunk (first `preview_lines`
    /// lines) or a success line
    pub fn results(result: &VerificationResult, preview_lines: usize) -> Result<String> {
        let mut output = String::new();
        let summary = &result.summary;

        writeln!(output)?;
        writeln!(output, "RESULTS:")?;
        writeln!(output, "Total Source Chunks Checked: {}", summary.total)?;
        writeln!(output, "Matches Found: {}", summary.matched)?;
        writeln!(output, "Missing/Mismatched Chunks: {}", summary.missing)?;

        if result.passed() {
            writeln!(output)?;
            writeln!(
                output,
                "SUCCESS: All content from the source document was found in the notebook!"
            )?;
            return Ok(output);
        }

        writeln!(output)?;
        writeln!(
            output,
            "WARNING: The following sections from the source document appear to be MISSING or ALTERED in the notebook:"
        )?;
        writeln!(output, "{}", RULE)?;
        for (i, chunk) in result.missing_chunks().enumerate() {
            writeln!(output, "--- MISSING CHUNK #{} ---", i + 1)?;
            for line in chunk.lines().take(preview_lines) {
                writeln!(output, "{}", line)?;
            }
            writeln!(output, "{}", &RULE[..20])?;
        }
        writeln!(output, "{}", RULE)?;

        Ok(output)
    }

    /// Header and results together
    pub fn format(
        source: &str,
        notebook: &str,
        result: &VerificationResult,
        preview_lines: usize,
    ) -> Result<String> {
        let mut output = Self::header(source, notebook)?;
        output.push_str(&Self::results(result, preview_lines)?);
        Ok(output)
    }
}

/// Machine-readable report for build pipelines
pub struct JsonReport;

impl JsonReport {
    pub fn format(source: &str, notebook: &str, result: &VerificationResult) -> Result<String> {
        let value = serde_json::json!({
            "source": source,
            "notebook": notebook,
            "summary": result.summary,
            "missing_chunks": result.missing_chunks().collect::<Vec<_>>(),
            "chunks": result.chunks,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
