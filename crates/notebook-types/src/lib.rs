//! Typed model of a Jupyter notebook (`.ipynb`, nbformat 4).
//!
//! Only the parts the authoring tools read or edit are typed: the cell list,
//! each cell's kind, body and metadata. Every other field is carried in an
//! `extra` map so a load/save cycle does not drop anything.

pub mod error;
pub mod types;

pub use error::NotebookError;
pub use types::{Cell, CellKind, Notebook};
