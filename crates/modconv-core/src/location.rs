//! Source code location types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A position inside a source file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path
    pub file: PathBuf,
    /// Byte offset from the start of the file
    pub offset: usize,
    /// Line (1-based)
    pub line: u32,
    /// Column (1-based)
    pub column: u32,
}

impl Location {
    /// Create a new location
    pub fn new(file: impl Into<PathBuf>, offset: usize, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            offset,
            line,
            column,
        }
    }

    /// Compute line and column for `offset` inside `text`
    pub fn from_offset(file: impl Into<PathBuf>, text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let before = &text.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() as u32 + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map(|p| p + 1)
            .unwrap_or(0);

        Self {
            file: file.into(),
            offset,
            line,
            column: (offset - line_start) as u32 + 1,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}
