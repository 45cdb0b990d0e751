//! Loading the two inputs of a fidelity check
//!
//! The source document is read as plain UTF-8 text. The notebook is parsed
//! and flattened to the prose a reader sees: the bodies of its markdown
//! cells, in order, one newline between cells.

use std::fs;
use std::path::Path;

use notebook_types::{Notebook, NotebookError};

use crate::error::FidelityError;

/// Read the source markdown file
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<String, FidelityError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| FidelityError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the notebook file
pub fn load_notebook<P: AsRef<Path>>(path: P) -> Result<Notebook, FidelityError> {
    let path = path.as_ref();
    Notebook::from_file(path).map_err(|e| match e {
        NotebookError::Read { source, .. } | NotebookError::Write { source, .. } => {
            FidelityError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
        NotebookError::Parse(message) | NotebookError::Serialization(message) => {
            FidelityError::Parse {
                path: path.to_path_buf(),
                message,
            }
        }
    })
}

/// Text of all markdown cells joined by newlines
///
/// Code cells, raw cells and metadata never contribute.
pub fn markdown_text(notebook: &Notebook) -> String {
    notebook
        .markdown_cells()
        .map(|cell| cell.source.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
