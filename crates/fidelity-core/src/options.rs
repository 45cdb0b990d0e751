use serde::{Deserialize, Serialize};

/// Tunables for a fidelity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOptions {
    /// Chunks whose normalized text is shorter than this (in characters) are
    /// skipped: bare section numbers and single words match anything.
    #[serde(default = "default_min_chunk_len")]
    pub min_chunk_len: usize,
    /// Lines of each missing chunk shown in the console report
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

fn default_min_chunk_len() -> usize {
    5
}

fn default_preview_lines() -> usize {
    5
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            min_chunk_len: default_min_chunk_len(),
            preview_lines: default_preview_lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CheckOptions::default();
        assert_eq!(options.min_chunk_len, 5);
        assert_eq!(options.preview_lines, 5);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options: CheckOptions = serde_json::from_str(r#"{"min_chunk_len": 12}"#).unwrap();
        assert_eq!(options.min_chunk_len, 12);
        assert_eq!(options.preview_lines, 5);
    }
}
