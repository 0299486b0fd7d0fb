//! Byte patches over an unchanged original
//!
//! Offsets always refer to the original bytes, so edits can be recorded in
//! any order and text that is not valid UTF-8 passes through untouched.
//! Several insertions at one offset keep a stable order: text inserted
//! "before" lands in front of everything inserted there earlier, text
//! inserted "after" lands behind it.

use std::collections::BTreeMap;
use std::ops::Range;

#[derive(Debug, Default)]
struct Insertions {
    before: Vec<String>,
    after: Vec<String>,
}

/// Line terminator used by a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Taken from the first line of `bytes`, `Lf` when there is none
    pub fn detect(bytes: &[u8]) -> Self {
        match bytes.iter().position(|&b| b == b'\n') {
            Some(i) if i > 0 && bytes[i - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Convert the line breaks of generated `text`
    pub fn apply(self, text: &str) -> String {
        match self {
            LineEnding::Lf => text.to_string(),
            LineEnding::CrLf => text.replace("\r\n", "\n").replace('\n', "\r\n"),
        }
    }
}

/// Pending edits of one file
#[derive(Debug)]
pub struct RewriteBuffer {
    original: Vec<u8>,
    line_ending: LineEnding,
    insertions: BTreeMap<usize, Insertions>,
    removed: Vec<Range<usize>>,
}

impl RewriteBuffer {
    pub fn new(original: impl Into<Vec<u8>>) -> Self {
        let original = original.into();
        Self {
            line_ending: LineEnding::detect(&original),
            original,
            insertions: BTreeMap::new(),
            removed: Vec::new(),
        }
    }

    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// Line terminator of the original; inserted text is converted to it
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.original.len())
    }

    pub fn insert_before(&mut self, offset: usize, text: &str) {
        let offset = self.clamp(offset);
        let text = self.line_ending.apply(text);
        self.insertions.entry(offset).or_default().before.push(text);
    }

    pub fn insert_after(&mut self, offset: usize, text: &str) {
        let offset = self.clamp(offset);
        let text = self.line_ending.apply(text);
        self.insertions.entry(offset).or_default().after.push(text);
    }

    /// Replace `len` original bytes at `offset`
    pub fn replace(&mut self, offset: usize, len: usize, text: &str) {
        let start = self.clamp(offset);
        let end = self.clamp(offset.saturating_add(len));
        if start < end {
            self.removed.push(start..end);
        }
        self.insert_after(start, text);
    }

    /// Insert in front of the final line terminator, or the last byte
    pub fn insert_at_last(&mut self, text: &str) {
        let len = self.original.len();
        let offset = if self.original.ends_with(b"\r\n") {
            len - 2
        } else {
            len.saturating_sub(1)
        };
        self.insert_before(offset, text);
    }

    fn is_removed(&self, offset: usize) -> bool {
        self.removed.iter().any(|r| r.contains(&offset))
    }

    /// Apply every edit
    pub fn render(&self) -> Vec<u8> {
        let mut boundaries: Vec<usize> = self.insertions.keys().copied().collect();
        for r in &self.removed {
            boundaries.push(r.start);
            boundaries.push(r.end);
        }
        boundaries.push(self.original.len());
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut out = Vec::with_capacity(self.original.len() + 256);
        let mut pos = 0;
        for boundary in boundaries {
            if boundary > pos && !self.is_removed(pos) {
                out.extend_from_slice(&self.original[pos..boundary]);
            }
            pos = boundary;

            if let Some(ins) = self.insertions.get(&boundary) {
                for text in ins.before.iter().rev() {
                    out.extend_from_slice(text.as_bytes());
                }
                for text in &ins.after {
                    out.extend_from_slice(text.as_bytes());
                }
            }
        }
        out
    }
}
