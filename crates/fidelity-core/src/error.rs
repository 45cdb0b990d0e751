use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions of a fidelity run
///
/// A chunk missing from the notebook is not an error; it is reported in the
/// [`VerificationResult`](crate::VerificationResult).
#[derive(Error, Debug)]
pub enum FidelityError {
    #[error("Error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing notebook {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
