//! Code-cell visibility for Colab
//!
//! Colab collapses a code cell to its form view when the cell's metadata has
//! `cellView: "form"`, and shows a `# @title` line as the form's heading.
//! Students then see a titled "Play" button instead of widget source.

use notebook_types::{Cell, Notebook};
use serde_json::Value;
use tracing::debug;

const CELL_VIEW: &str = "cellView";
const FORM: &str = "form";
const TITLE_MARKER: &str = "# @title";
const GENERIC_TITLE: &str = "# @title Click 'Play' to Run Code";

fn is_form_view(cell: &Cell) -> bool {
    cell.metadata.get(CELL_VIEW).and_then(Value::as_str) == Some(FORM)
}

fn set_form_view(cell: &mut Cell) -> bool {
    if is_form_view(cell) {
        return false;
    }
    cell.metadata
        .insert(CELL_VIEW.to_string(), Value::String(FORM.to_string()));
    true
}

/// Put every code cell in form view and drop the legacy `collapsed` flag
///
/// Returns the number of cells whose view changed.
pub fn hide_code_cells(notebook: &mut Notebook) -> usize {
    let mut updates = 0;
    for cell in notebook.code_cells_mut() {
        if set_form_view(cell) {
            updates += 1;
        }
        cell.metadata.remove("collapsed");
    }
    debug!(updates, "Hid code cells");
    updates
}

/// Form view only for code cells that carry a `# @title` line
pub fn hide_titled_cells(notebook: &mut Notebook) -> usize {
    let mut updates = 0;
    for cell in notebook.code_cells_mut() {
        if cell.source.contains(TITLE_MARKER) && set_form_view(cell) {
            updates += 1;
        }
    }
    debug!(updates, "Hid titled code cells");
    updates
}

/// Give every code cell a `# @title` line and form view
///
/// A cell whose first line declares a class is titled after the class;
/// others get a generic title. Returns the number of titles added.
pub fn ensure_form_titles(notebook: &mut Notebook) -> usize {
    let mut added = 0;
    for cell in notebook.code_cells_mut() {
        if !cell.source.contains(TITLE_MARKER) {
            let title = title_for(&cell.source);
            cell.source = format!("{}\n{}", title, cell.source);
            added += 1;
        }
        set_form_view(cell);
    }
    debug!(added, "Added form titles");
    added
}

fn title_for(source: &str) -> String {
    let first_line = source.lines().next().unwrap_or_default();
    match first_line.trim_start().strip_prefix("class ") {
        Some(rest) => {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if name.is_empty() {
                GENERIC_TITLE.to_string()
            } else {
                format!("{} {} - Click 'Play'", TITLE_MARKER, name)
            }
        }
        None => GENERIC_TITLE.to_string(),
    }
}
