use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::NotebookError;

/// A parsed notebook document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// `nbformat`, `nbformat_minor` and anything else at the top level
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Notebook {
    /// Parse a notebook from its JSON text
    ///
    /// Fails with [`NotebookError::Parse`] when the text is not JSON, has no
    /// `cells` array, or holds a cell without `cell_type` or `source`.
    pub fn from_json(json: &str) -> Result<Self, NotebookError> {
        serde_json::from_str(json).map_err(|e| NotebookError::Parse(e.to_string()))
    }

    /// Read and parse a notebook file (UTF-8)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, NotebookError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| NotebookError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Serialize with one-space indentation and a trailing newline, the
    /// layout Jupyter itself writes.
    pub fn to_json_pretty(&self) -> Result<String, NotebookError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| NotebookError::Serialization(e.to_string()))?;
        let mut out =
            String::from_utf8(buf).map_err(|e| NotebookError::Serialization(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), NotebookError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| NotebookError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn markdown_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.cell_type == CellKind::Markdown)
    }

    pub fn code_cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells
            .iter_mut()
            .filter(|c| c.cell_type == CellKind::Code)
    }
}

/// Kind of a notebook cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CellKind {
    Markdown,
    Code,
    Raw,
    /// Any kind this tool does not know; kept verbatim
    Other(String),
}

impl CellKind {
    pub fn as_str(&self) -> &str {
        match self {
            CellKind::Markdown => "markdown",
            CellKind::Code => "code",
            CellKind::Raw => "raw",
            CellKind::Other(kind) => kind,
        }
    }
}

impl From<String> for CellKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "markdown" => CellKind::Markdown,
            "code" => CellKind::Code,
            "raw" => CellKind::Raw,
            _ => CellKind::Other(kind),
        }
    }
}

impl From<CellKind> for String {
    fn from(kind: CellKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single notebook cell
///
/// The body is held as one string no matter how the file stored it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: CellKind,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(with = "source_text")]
    pub source: String,
    /// `id`, `outputs`, `execution_count`, `attachments`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            cell_type: CellKind::Markdown,
            metadata: Map::new(),
            source: source.into(),
            extra: Map::new(),
        }
    }

    /// A code cell with no outputs and no execution count
    pub fn code(source: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("execution_count".to_string(), Value::Null);
        extra.insert("outputs".to_string(), Value::Array(Vec::new()));
        Self {
            cell_type: CellKind::Code,
            metadata: Map::new(),
            source: source.into(),
            extra,
        }
    }

    pub fn new(kind: CellKind, source: impl Into<String>) -> Self {
        match kind {
            CellKind::Code => Self::code(source),
            other => Self {
                cell_type: other,
                ..Self::markdown(source)
            },
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type == CellKind::Markdown
    }

    pub fn is_code(&self) -> bool {
        self.cell_type == CellKind::Code
    }

    /// Same kind and body; metadata and ids are not compared
    pub fn same_content(&self, other: &Cell) -> bool {
        self.cell_type == other.cell_type && self.source == other.source
    }
}

/// `source` is either a string or a list of line fragments on disk. Both
/// load into one string; saving writes the fragment list.
mod source_text {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSource {
        Text(String),
        Lines(Vec<String>),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawSource::deserialize(deserializer)? {
            RawSource::Text(text) => text,
            RawSource::Lines(lines) => lines.concat(),
        })
    }

    pub fn serialize<S>(source: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(source.split_inclusive('\n'))
    }
}
