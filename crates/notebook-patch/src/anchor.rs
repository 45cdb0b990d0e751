//! Content-addressed cell insertion
//!
//! An [`Anchor`] picks a cell by what it says, not where it is. Insertion is
//! split into a pure splice ([`insert_after`]) and a notebook-level wrapper
//! that skips work already done and verifies the anchor's new neighbours.

use notebook_types::{Cell, CellKind, Notebook};
use tracing::{debug, info};

use crate::error::PatchError;

/// Locates a cell by a substring of its body, optionally limited to one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub kind: Option<CellKind>,
}

impl Anchor {
    /// Match any cell kind
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: Some(CellKind::Markdown),
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: Some(CellKind::Code),
        }
    }

    pub fn matches(&self, cell: &Cell) -> bool {
        self.kind.as_ref().map_or(true, |kind| &cell.cell_type == kind)
            && cell.source.contains(&self.text)
    }
}

/// Index of the first cell the anchor matches
pub fn find_anchor(cells: &[Cell], anchor: &Anchor) -> Option<usize> {
    cells.iter().position(|cell| anchor.matches(cell))
}

/// New cell sequence with `new_cells` placed right after `cells[index]`
pub fn insert_after(
    cells: &[Cell],
    index: usize,
    new_cells: &[Cell],
) -> Result<Vec<Cell>, PatchError> {
    if index >= cells.len() {
        return Err(PatchError::IndexOutOfRange {
            index,
            len: cells.len(),
        });
    }

    let mut patched = Vec::with_capacity(cells.len() + new_cells.len());
    patched.extend_from_slice(&cells[..=index]);
    patched.extend_from_slice(new_cells);
    patched.extend_from_slice(&cells[index + 1..]);
    Ok(patched)
}

/// What [`insert_after_anchor`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { anchor_index: usize, count: usize },
    /// The cells already follow the anchor; nothing changed
    AlreadyPresent { anchor_index: usize },
}

/// Insert `new_cells` after the first cell matching `anchor`
///
/// Idempotent: when the cells right after the anchor already have the same
/// kinds and bodies as `new_cells`, the notebook is left alone.
pub fn insert_after_anchor(
    notebook: &mut Notebook,
    anchor: &Anchor,
    new_cells: Vec<Cell>,
) -> Result<InsertOutcome, PatchError> {
    let index = find_anchor(&notebook.cells, anchor)
        .ok_or_else(|| PatchError::AnchorNotFound(anchor.text.clone()))?;

    if follows(&notebook.cells, index, &new_cells) {
        debug!(anchor_index = index, "Cells already present after anchor");
        return Ok(InsertOutcome::AlreadyPresent {
            anchor_index: index,
        });
    }

    let patched = insert_after(&notebook.cells, index, &new_cells)?;

    if !anchor.matches(&patched[index]) || !follows(&patched, index, &new_cells) {
        return Err(PatchError::PostCondition(format!(
            "inserted cells do not follow anchor at index {}",
            index
        )));
    }

    notebook.cells = patched;
    info!(
        anchor_index = index,
        count = new_cells.len(),
        "Inserted cells after anchor"
    );
    Ok(InsertOutcome::Inserted {
        anchor_index: index,
        count: new_cells.len(),
    })
}

fn follows(cells: &[Cell], index: usize, expected: &[Cell]) -> bool {
    let start = index + 1;
    let end = start + expected.len();
    end <= cells.len()
        && cells[start..end]
            .iter()
            .zip(expected)
            .all(|(have, want)| have.same_content(want))
}
