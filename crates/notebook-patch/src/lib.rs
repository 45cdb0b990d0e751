//! Structural edits for course notebooks
//!
//! Every operation works on an in-memory [`Notebook`](notebook_types::Notebook)
//! and is idempotent: running it a second time changes nothing. Cells are
//! located by content (an [`Anchor`]) rather than by index, and insertions are
//! checked after they are applied.

pub mod anchor;
pub mod error;
pub mod inspect;
pub mod markdown;
pub mod reorder;
pub mod visibility;

pub use anchor::{find_anchor, insert_after, insert_after_anchor, Anchor, InsertOutcome};
pub use error::PatchError;
pub use inspect::{summarize, CellSummary};
pub use markdown::{fix_latex_backticks, strip_indentation};
pub use reorder::move_section_to_end;
pub use visibility::{ensure_form_titles, hide_code_cells, hide_titled_cells};
