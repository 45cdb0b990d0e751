//! `nbtool` subcommands
//!
//! Edit commands read the notebook, apply one patch operation and write the
//! file back only when something changed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use notebook_patch::{
    ensure_form_titles, fix_latex_backticks, hide_code_cells, hide_titled_cells,
    insert_after_anchor, move_section_to_end, strip_indentation, summarize, Anchor, InsertOutcome,
};
use notebook_types::{Cell, CellKind, Notebook};
use tracing::{info, warn};

use crate::verify::{self, VerifyArgs};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check that a notebook contains all text from its source markdown
    Verify(VerifyArgs),

    /// List every cell with its kind and a short preview
    Inspect { notebook: PathBuf },

    /// Collapse code cells to Colab form view
    HideCode {
        #[arg(required = true)]
        notebooks: Vec<PathBuf>,

        /// Only cells that already carry a `# @title` line
        #[arg(long)]
        titled_only: bool,
    },

    /// Add a `# @title` line to code cells that lack one
    AddTitles {
        #[arg(required = true)]
        notebooks: Vec<PathBuf>,
    },

    /// Unwrap inline math from code spans: $`x`$ -> $x$
    FixLatex {
        #[arg(required = true)]
        notebooks: Vec<PathBuf>,
    },

    /// Strip leading whitespace from each line of the anchored markdown cell
    StripIndent {
        notebook: PathBuf,
        #[arg(long)]
        anchor: String,
    },

    /// Insert a cell after the first cell containing the anchor text
    Insert {
        notebook: PathBuf,
        #[arg(long)]
        anchor: String,
        /// Kind of the new cell
        #[arg(long, value_enum, default_value_t = NewCellKind::Markdown)]
        kind: NewCellKind,
        /// File holding the new cell's body
        #[arg(long)]
        cell_file: PathBuf,
    },

    /// Move the anchored markdown section (through its widget) to the end
    MoveToEnd {
        notebook: PathBuf,
        #[arg(long)]
        anchor: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewCellKind {
    Markdown,
    Code,
}

impl From<NewCellKind> for CellKind {
    fn from(kind: NewCellKind) -> Self {
        match kind {
            NewCellKind::Markdown => CellKind::Markdown,
            NewCellKind::Code => CellKind::Code,
        }
    }
}

/// Run one subcommand; `Ok(false)` means the command ran but failed its
/// check (only `verify` can do that)
pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<bool> {
    match command {
        Command::Verify(args) => verify::run(args, out),
        Command::Inspect { notebook } => {
            let nb = load(notebook)?;
            writeln!(out, "Inspecting: {}", notebook.display())?;
            writeln!(out, "Total Cells: {}", nb.cells.len())?;
            for summary in summarize(&nb) {
                writeln!(out, "{}", summary)?;
            }
            Ok(true)
        }
        Command::HideCode {
            notebooks,
            titled_only,
        } => for_each_notebook(notebooks, out, "Hid", |nb| {
            if *titled_only {
                hide_titled_cells(nb)
            } else {
                hide_code_cells(nb)
            }
        }),
        Command::AddTitles { notebooks } => {
            for_each_notebook(notebooks, out, "Added titles to", ensure_form_titles)
        }
        Command::FixLatex { notebooks } => {
            for_each_notebook(notebooks, out, "Fixed", fix_latex_backticks)
        }
        Command::StripIndent { notebook, anchor } => {
            let mut nb = load(notebook)?;
            let changed = strip_indentation(&mut nb, &Anchor::markdown(anchor.as_str()))?;
            if changed {
                save(&nb, notebook)?;
                writeln!(out, "Stripped indentation in {}", notebook.display())?;
            } else {
                writeln!(out, "No changes needed for {}.", notebook.display())?;
            }
            Ok(true)
        }
        Command::Insert {
            notebook,
            anchor,
            kind,
            cell_file,
        } => {
            let body = fs::read_to_string(cell_file)
                .with_context(|| format!("Failed to read cell file: {}", cell_file.display()))?;
            let mut nb = load(notebook)?;
            let cell = Cell::new((*kind).into(), body);
            match insert_after_anchor(&mut nb, &Anchor::new(anchor.as_str()), vec![cell])? {
                InsertOutcome::Inserted { anchor_index, .. } => {
                    save(&nb, notebook)?;
                    writeln!(
                        out,
                        "Inserted cell after index {} in {}",
                        anchor_index,
                        notebook.display()
                    )?;
                }
                InsertOutcome::AlreadyPresent { anchor_index } => {
                    writeln!(
                        out,
                        "Cell already present after index {} in {}",
                        anchor_index,
                        notebook.display()
                    )?;
                }
            }
            Ok(true)
        }
        Command::MoveToEnd { notebook, anchor } => {
            let mut nb = load(notebook)?;
            let before = nb.clone();
            let moved = move_section_to_end(&mut nb, &Anchor::markdown(anchor.as_str()))?;
            if nb != before {
                save(&nb, notebook)?;
            }
            writeln!(
                out,
                "Moved {} cells to the end of {}",
                moved,
                notebook.display()
            )?;
            Ok(true)
        }
    }
}

/// Apply `op` to each notebook that exists; missing paths are skipped
fn for_each_notebook<W, F>(notebooks: &[PathBuf], out: &mut W, verb: &str, mut op: F) -> Result<bool>
where
    W: Write,
    F: FnMut(&mut Notebook) -> usize,
{
    for path in notebooks {
        if !path.exists() {
            warn!(path = %path.display(), "Notebook not found");
            writeln!(out, "Skipping {} (not found)", path.display())?;
            continue;
        }

        let mut nb = load(path)?;
        let updates = op(&mut nb);
        if updates > 0 {
            save(&nb, path)?;
            writeln!(out, "{} {} cells in {}", verb, updates, path.display())?;
        } else {
            writeln!(out, "No changes needed for {}.", path.display())?;
        }
    }
    Ok(true)
}

fn load(path: &Path) -> Result<Notebook> {
    Ok(Notebook::from_file(path)?)
}

fn save(nb: &Notebook, path: &Path) -> Result<()> {
    nb.write_file(path)?;
    info!(path = %path.display(), "Saved notebook");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOTEBOOK: &str = r##"{
 "cells": [
  {"cell_type": "markdown", "metadata": {}, "source": "# Chapter 13: Experiments"},
  {"cell_type": "code", "execution_count": null, "metadata": {}, "outputs": [], "source": "run_experiment()"}
 ],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 4
}"##;

    fn setup() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Chapter_13.ipynb");
        fs::write(&path, NOTEBOOK).unwrap();
        (dir, path)
    }

    fn output(command: Command) -> String {
        let mut out = Vec::new();
        assert!(run(&command, &mut out).unwrap());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_inspect() {
        let (_dir, path) = setup();
        let text = output(Command::Inspect { notebook: path });
        assert!(text.contains("Total Cells: 2"));
        assert!(text.contains("Cell 0 [markdown]: # Chapter 13: Experiments"));
        assert!(text.contains("Cell 1 [code]: run_experiment()"));
    }

    #[test]
    fn test_hide_code_writes_once() {
        let (_dir, path) = setup();
        let command = Command::HideCode {
            notebooks: vec![path.clone()],
            titled_only: false,
        };
        assert!(output(command.clone()).contains("Hid 1 cells"));
        assert!(output(command).contains("No changes needed"));

        let nb = Notebook::from_file(&path).unwrap();
        assert_eq!(nb.cells[1].metadata.get("cellView"), Some(&serde_json::json!("form")));
    }

    #[test]
    fn test_missing_notebook_is_skipped() {
        let (dir, path) = setup();
        let text = output(Command::FixLatex {
            notebooks: vec![dir.path().join("Chapter_99.ipynb"), path],
        });
        assert!(text.contains("Skipping"));
        assert!(text.contains("No changes needed"));
    }

    #[test]
    fn test_insert_from_cell_file() {
        let (dir, path) = setup();
        let cell_file = dir.path().join("widget.py");
        fs::write(&cell_file, "# @title Randomization\nshow()").unwrap();
        let command = Command::Insert {
            notebook: path.clone(),
            anchor: "Chapter 13".to_string(),
            kind: NewCellKind::Code,
            cell_file,
        };

        assert!(output(command.clone()).contains("Inserted cell after index 0"));
        assert!(output(command).contains("already present"));

        let nb = Notebook::from_file(&path).unwrap();
        assert_eq!(nb.cells.len(), 3);
        assert!(nb.cells[1].is_code());
        assert_eq!(nb.cells[1].source, "# @title Randomization\nshow()");
    }

    #[test]
    fn test_strip_indent_missing_anchor_is_error() {
        let (_dir, path) = setup();
        let mut out = Vec::new();
        let command = Command::StripIndent {
            notebook: path,
            anchor: "Phillies".to_string(),
        };
        assert!(run(&command, &mut out).is_err());
    }
}
