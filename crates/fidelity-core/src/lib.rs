//! Notebook fidelity checking
//!
//! Verifies that a notebook converted from a source document still carries
//! all of the document's prose. The source is split into blank-line
//! separated chunks; every chunk must appear, after normalization, somewhere
//! in the notebook's markdown cells.
//!
//! # Example
//!
//! ```
//! use fidelity_core::{CheckOptions, FidelityChecker};
//! use notebook_types::{Cell, Notebook};
//!
//! let notebook = Notebook {
//!     cells: vec![Cell::markdown("# Paragraph one."), Cell::markdown("Paragraph two.")],
//!     metadata: Default::default(),
//!     extra: Default::default(),
//! };
//! let checker = FidelityChecker::new(CheckOptions::default());
//! let result = checker.check("Paragraph one.\n\nParagraph two.", &notebook);
//! assert!(result.passed());
//! ```

pub mod chunks;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod options;
pub mod report;
pub mod verify;

pub use chunks::split_chunks;
pub use error::FidelityError;
pub use extract::{load_notebook, load_source, markdown_text};
pub use normalize::normalize;
pub use options::CheckOptions;
pub use report::{ConsoleReport, JsonReport};
pub use verify::{
    verify_files, ChunkOutcome, FidelityChecker, VerificationResult, VerificationSummary,
};
