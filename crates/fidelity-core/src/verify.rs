//! Fidelity verification
//!
//! Drives both extractors and checks each source chunk for containment in
//! the notebook's normalized markdown text. Matching is exact substring
//! search on normalized text; there is no fuzzy tolerance.

use std::path::Path;

use notebook_types::Notebook;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chunks::split_chunks;
use crate::error::FidelityError;
use crate::extract::{load_notebook, load_source, markdown_text};
use crate::normalize::normalize;
use crate::options::CheckOptions;

/// Whether one source chunk was found in the notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkOutcome {
    /// Chunk text as written in the source (trimmed, not normalized)
    pub chunk: String,
    pub found: bool,
}

/// Aggregate counts of a verification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Chunks considered (short chunks are not counted)
    pub total: usize,
    pub matched: usize,
    pub missing: usize,
    /// True iff nothing is missing
    pub passed: bool,
}

/// Outcome of checking a source document against a notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// One entry per checked chunk, in source order
    pub chunks: Vec<ChunkOutcome>,
    pub summary: VerificationSummary,
}

impl VerificationResult {
    fn from_outcomes(chunks: Vec<ChunkOutcome>) -> Self {
        let matched = chunks.iter().filter(|c| c.found).count();
        let missing = chunks.len() - matched;
        Self {
            summary: VerificationSummary {
                total: chunks.len(),
                matched,
                missing,
                passed: missing == 0,
            },
            chunks,
        }
    }

    pub fn passed(&self) -> bool {
        self.summary.passed
    }

    /// Chunks that were not found, in source order
    pub fn missing_chunks(&self) -> impl Iterator<Item = &str> {
        self.chunks
            .iter()
            .filter(|c| !c.found)
            .map(|c| c.chunk.as_str())
    }
}

/// Fidelity checker entry point
pub struct FidelityChecker {
    options: CheckOptions,
}

impl FidelityChecker {
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Check raw source text against a parsed notebook
    pub fn check(&self, source: &str, notebook: &Notebook) -> VerificationResult {
        let chunks = split_chunks(source, self.options.min_chunk_len);

        // Normalized once; every chunk searches the same haystack
        let haystack = normalize(&markdown_text(notebook));

        let outcomes: Vec<ChunkOutcome> = chunks
            .into_iter()
            .map(|chunk| {
                let found = haystack.contains(&normalize(&chunk));
                if !found {
                    debug!(chunk = %first_line(&chunk), "Source chunk not found in notebook");
                }
                ChunkOutcome { chunk, found }
            })
            .collect();

        let result = VerificationResult::from_outcomes(outcomes);
        info!(
            total = result.summary.total,
            matched = result.summary.matched,
            missing = result.summary.missing,
            "Fidelity check complete"
        );
        result
    }

    /// Load both files and check them
    ///
    /// # Errors
    ///
    /// - `FidelityError::Io` if either path cannot be read
    /// - `FidelityError::Parse` if the notebook is not a valid notebook
    pub fn check_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source_path: P,
        notebook_path: Q,
    ) -> Result<VerificationResult, FidelityError> {
        let source = load_source(source_path)?;
        let notebook = load_notebook(notebook_path)?;
        Ok(self.check(&source, &notebook))
    }
}

impl Default for FidelityChecker {
    fn default() -> Self {
        Self::new(CheckOptions::default())
    }
}

/// Check `source_path` against `notebook_path` with the given options
pub fn verify_files<P: AsRef<Path>, Q: AsRef<Path>>(
    source_path: P,
    notebook_path: Q,
    options: CheckOptions,
) -> Result<VerificationResult, FidelityError> {
    FidelityChecker::new(options).check_files(source_path, notebook_path)
}

fn first_line(chunk: &str) -> &str {
    chunk.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebook_types::Cell;
    use pretty_assertions::assert_eq;

    fn notebook(cells: Vec<Cell>) -> Notebook {
        Notebook {
            cells,
            metadata: Default::default(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_full_match() {
        let nb = notebook(vec![
            Cell::markdown("Paragraph one."),
            Cell::markdown("Paragraph two. Extra text."),
        ]);
        let result = FidelityChecker::default().check("Paragraph one.\n\nParagraph two.", &nb);

        assert!(result.passed());
        assert_eq!(result.summary.total, 2);
        assert_eq!(result.summary.matched, 2);
        assert_eq!(result.summary.missing, 0);
    }

    #[test]
    fn test_partial_mismatch() {
        let nb = notebook(vec![Cell::markdown("Alpha section text.")]);
        let result = FidelityChecker::default().check(
            "Alpha section text.\n\nBeta section text that is absent.",
            &nb,
        );

        assert!(!result.passed());
        assert_eq!(result.summary.matched, 1);
        assert_eq!(result.summary.missing, 1);
        assert_eq!(
            result.missing_chunks().collect::<Vec<_>>(),
            vec!["Beta section text that is absent."]
        );
    }

    #[test]
    fn test_code_cells_are_not_searched() {
        let nb = notebook(vec![
            Cell::markdown("Intro paragraph."),
            Cell::code("# The simulation repeats the trial 1000 times."),
        ]);
        let result = FidelityChecker::default().check(
            "Intro paragraph.\n\nThe simulation repeats the trial 1000 times.",
            &nb,
        );

        assert!(!result.passed());
        assert_eq!(result.summary.missing, 1);
    }

    #[test]
    fn test_empty_source_passes_vacuously() {
        let nb = notebook(vec![Cell::markdown("Anything at all.")]);
        let result = FidelityChecker::default().check("", &nb);

        assert!(result.passed());
        assert_eq!(result.summary.total, 0);
        assert_eq!(result.summary.matched, 0);
        assert_eq!(result.summary.missing, 0);
    }

    #[test]
    fn test_short_chunk_not_counted() {
        let nb = notebook(vec![Cell::markdown("Nothing relevant here.")]);
        let result = FidelityChecker::default().check("Hi\n\nNothing relevant here.", &nb);

        assert_eq!(result.summary.total, 1);
        assert!(result.passed());
    }

    #[test]
    fn test_formatting_differences_still_match() {
        let nb = notebook(vec![Cell::markdown(
            "## Example 3\n**Rolling** two dice:\nthe *sample space* has 36 outcomes.",
        )]);
        let source = "Example 3\n\nRolling two dice: the sample space has 36 outcomes.";
        assert!(FidelityChecker::default().check(source, &nb).passed());
    }

    #[test]
    fn test_chunk_spanning_cells_matches_across_boundary() {
        let nb = notebook(vec![Cell::markdown("First half of"), Cell::markdown("the sentence.")]);
        let result = FidelityChecker::default().check("First half of the sentence.", &nb);
        assert!(result.passed());
    }

    #[test]
    fn test_stray_character_is_reported_missing() {
        let nb = notebook(vec![Cell::markdown("The odds are 1 in 6.")]);
        let result = FidelityChecker::default().check("The odds are 1 in 6!", &nb);
        assert!(!result.passed());
    }

    #[test]
    fn test_image_chunk_with_bracketed_alt_is_skipped() {
        let nb = notebook(vec![Cell::markdown("Intro paragraph.")]);
        let result = FidelityChecker::default().check(
            "Intro paragraph.\n\n![Graph of E[X]](media/image3.png)",
            &nb,
        );

        assert!(result.passed());
        assert_eq!(result.summary.total, 1);
    }

    #[test]
    fn test_truncated_image_does_not_hide_later_cells() {
        let nb = notebook(vec![
            Cell::markdown("Toss a coin, see ![Figure 1](media/coin.png"),
            Cell::markdown("The law of large numbers says the proportion settles down."),
            Cell::markdown("The widget runs the trial (n = 1000) times."),
        ]);
        let result = FidelityChecker::default().check(
            "The law of large numbers says the proportion settles down.\n\nThe widget runs the trial (n = 1000) times.",
            &nb,
        );

        assert!(result.passed());
        assert_eq!(result.summary.matched, 2);
    }

    #[test]
    fn test_custom_min_chunk_len() {
        let nb = notebook(vec![Cell::markdown("unrelated")]);
        let options = CheckOptions {
            min_chunk_len: 1,
            ..CheckOptions::default()
        };
        let result = FidelityChecker::new(options).check("Hi", &nb);
        assert_eq!(result.summary.total, 1);
        assert_eq!(result.summary.missing, 1);
    }

    #[test]
    fn test_missing_chunks_keep_source_order() {
        let nb = notebook(vec![Cell::markdown("Second block is present.")]);
        let source = "First block is absent.\n\nSecond block is present.\n\nThird block is absent.";
        let result = FidelityChecker::default().check(source, &nb);
        assert_eq!(
            result.missing_chunks().collect::<Vec<_>>(),
            vec!["First block is absent.", "Third block is absent."]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use notebook_types::Cell;
    use proptest::prelude::*;

    fn notebook(cells: Vec<Cell>) -> Notebook {
        Notebook {
            cells,
            metadata: Default::default(),
            extra: Default::default(),
        }
    }

    proptest! {
        /// Property: reversing or rotating markdown cells never changes the verdict
        /// when every chunk sits inside a single cell
        #[test]
        fn cell_order_does_not_change_verdict(
            paragraphs in prop::collection::vec("[A-Z][a-z]{3,8}( [a-z]{2,8}){2,6}\\.", 1..6),
            absent in prop::option::of("Zq[a-z]{6} [a-z]{6} absent\\."),
            rotate in 0usize..6,
        ) {
            let mut source = paragraphs.join("\n\n");
            if let Some(extra) = &absent {
                source.push_str("\n\n");
                source.push_str(extra);
            }

            let cells: Vec<Cell> = paragraphs.iter().map(|p| Cell::markdown(p.clone())).collect();
            let mut shuffled = cells.clone();
            shuffled.reverse();
            let k = rotate % shuffled.len();
            shuffled.rotate_left(k);

            let checker = FidelityChecker::default();
            let a = checker.check(&source, &notebook(cells));
            let b = checker.check(&source, &notebook(shuffled));

            prop_assert_eq!(a.passed(), b.passed());
            prop_assert_eq!(a.summary, b.summary);
            prop_assert_eq!(a.passed(), absent.is_none());
        }

        /// Property: a notebook holding the source verbatim always passes
        #[test]
        fn verbatim_notebook_passes(source in "[a-zA-Z .*#\n]{0,200}") {
            let nb = notebook(vec![Cell::markdown(source.clone())]);
            prop_assert!(FidelityChecker::default().check(&source, &nb).passed());
        }
    }
}
