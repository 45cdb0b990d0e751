use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("Failed to read notebook {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write notebook {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid notebook: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
