// Markdown cell clean-ups
use notebook_types::Notebook;
use tracing::debug;

use crate::anchor::{find_anchor, Anchor};
use crate::error::PatchError;

/// Turn `` $`P(A)`$ `` into `$P(A)$` in every markdown cell
///
/// Converters sometimes wrap inline math in code spans, which stops MathJax
/// from rendering it. Returns the number of cells changed.
pub fn fix_latex_backticks(notebook: &mut Notebook) -> usize {
    let mut updates = 0;
    for cell in notebook.cells.iter_mut().filter(|c| c.is_markdown()) {
        let fixed = cell.source.replace("$`", "$").replace("`$", "$");
        if fixed != cell.source {
            cell.source = fixed;
            updates += 1;
        }
    }
    debug!(updates, "Fixed LaTeX backticks");
    updates
}

/// Strip leading whitespace from every line of the anchored cell
///
/// Indented HTML inside a markdown cell renders as a code block; flush-left
/// lines render as HTML. Returns whether the cell changed.
pub fn strip_indentation(notebook: &mut Notebook, anchor: &Anchor) -> Result<bool, PatchError> {
    let index = find_anchor(&notebook.cells, anchor)
        .ok_or_else(|| PatchError::AnchorNotFound(anchor.text.clone()))?;
    let cell = &mut notebook.cells[index];

    // line terminators are kept as they are
    let stripped = cell
        .source
        .split_inclusive('\n')
        .map(|line| line.trim_start_matches(is_indent))
        .collect::<String>();

    if stripped == cell.source {
        return Ok(false);
    }
    cell.source = stripped;
    debug!(index, "Stripped indentation");
    Ok(true)
}

fn is_indent(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}
