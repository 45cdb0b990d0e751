// Section moves
use notebook_types::Notebook;
use tracing::info;

use crate::anchor::{find_anchor, Anchor};
use crate::error::PatchError;

/// Move the section starting at the anchored cell to the end of the notebook
///
/// The section runs from the anchor through the first code cell after it
/// (the widget that belongs to the heading), or to the end of the notebook if
/// no code cell follows. Returns the number of cells moved. Running it again
/// finds the section already at the end and leaves the order unchanged.
pub fn move_section_to_end(notebook: &mut Notebook, anchor: &Anchor) -> Result<usize, PatchError> {
    let start = find_anchor(&notebook.cells, anchor)
        .ok_or_else(|| PatchError::AnchorNotFound(anchor.text.clone()))?;

    let end = notebook.cells[start + 1..]
        .iter()
        .position(|c| c.is_code())
        .map_or(notebook.cells.len(), |offset| start + 1 + offset + 1);

    let section: Vec<_> = notebook.cells.drain(start..end).collect();
    let moved = section.len();
    notebook.cells.extend(section);

    info!(moved, "Moved section to end of notebook");
    Ok(moved)
}
