use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("No cell matches anchor: {0}")]
    AnchorNotFound(String),

    #[error("Cell index {index} out of range for {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Patch post-condition failed: {0}")]
    PostCondition(String),
}
