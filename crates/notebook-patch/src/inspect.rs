//! One-line-per-cell listing of a notebook

use notebook_types::{CellKind, Notebook};
use serde::Serialize;

const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSummary {
    pub index: usize,
    pub kind: CellKind,
    /// Trimmed body on one line, cut at 100 characters
    pub preview: String,
}

impl std::fmt::Display for CellSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell {} [{}]: {}", self.index, self.kind, self.preview)
    }
}

pub fn summarize(notebook: &Notebook) -> Vec<CellSummary> {
    notebook
        .cells
        .iter()
        .enumerate()
        .map(|(index, cell)| CellSummary {
            index,
            kind: cell.cell_type.clone(),
            preview: preview(&cell.source),
        })
        .collect()
}

fn preview(source: &str) -> String {
    let trimmed = source.trim();
    if trimmed.chars().count() > PREVIEW_CHARS {
        let head: String = trimmed.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head.replace('\n', " "))
    } else {
        trimmed.replace('\n', " ")
    }
}
