//! Core type definitions

use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An `#include` directive written in the preamble of a file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Included {
    /// Canonical path of the included file, `None` when header search failed
    pub resolved: Option<PathBuf>,
    /// The include text as written, without delimiters
    pub text: String,
    /// `<...>` rather than `"..."`
    pub is_angled: bool,
}

impl Included {
    pub fn new(resolved: Option<PathBuf>, text: impl Into<String>, is_angled: bool) -> Self {
        Self {
            resolved,
            text: text.into(),
            is_angled,
        }
    }

    /// Render the directive as it was written
    pub fn directive(&self) -> String {
        if self.is_angled {
            format!("#include <{}>", self.text)
        } else {
            format!("#include \"{}\"", self.text)
        }
    }
}

/// A use of a macro in the body of a file whose definition lives elsewhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroUse {
    /// Macro name
    pub name: String,
    /// File containing the definition
    pub def_file: PathBuf,
    /// Where the macro was expanded
    pub use_loc: Location,
    /// Where the macro was defined
    pub def_loc: Location,
}

/// Offsets of an `#ifndef X` / `#define X` ... `#endif` guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllingMacroOffsets {
    /// Start of the `#ifndef` line
    pub def_start: usize,
    /// First token after the `#define` line
    pub def_end: usize,
    /// The `#` of the closing `#endif`
    pub endif: usize,
}

/// Byte range of the preprocessor preamble of a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreambleOffsets {
    pub start: usize,
    pub end: usize,
    pub controlling_macro: Option<ControllingMacroOffsets>,
}

impl PreambleOffsets {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            controlling_macro: None,
        }
    }

    /// An empty preamble has nothing to rewrite
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Collapse the range onto its start
    pub fn collapse(&mut self) {
        self.end = self.start;
    }
}

/// Facts collected for one file by the preprocessing pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedInfo {
    pub preamble: PreambleOffsets,
    /// Modules imported in the main file, flattened into one name each
    pub directly_imported: Vec<String>,
    /// Includes written in the main file before the end of the preamble
    pub directly_included: Vec<Included>,
    /// Body uses of macros defined in other files
    pub directly_used_macros: Vec<MacroUse>,
    /// The main file already tests the controlling macro with `#ifndef`
    pub controlling_macro_detected: bool,
    /// The main file already declares a module
    pub has_module_declaration: bool,
    pub succeeded: bool,
}

impl ProcessedInfo {
    /// Result of a pass that could not run at all
    pub fn failed() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }
}

/// A compile command for one translation unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    /// Working directory of the compiler
    pub directory: PathBuf,
    /// Full argv, the compiler first
    pub command_line: Vec<String>,
    /// The file being compiled
    pub filename: PathBuf,
}

impl CompileCommand {
    pub fn new(directory: impl Into<PathBuf>, command_line: Vec<String>, filename: &Path) -> Self {
        Self {
            directory: directory.into(),
            command_line,
            filename: filename.to_path_buf(),
        }
    }

    /// Same flags, compiling `filename` instead
    pub fn retarget(&self, filename: &Path) -> Self {
        let mut replaced = false;
        let mut command_line: Vec<String> = self
            .command_line
            .iter()
            .map(|arg| {
                if !replaced && self.directory.join(arg) == self.filename {
                    replaced = true;
                    filename.to_string_lossy().into_owned()
                } else {
                    arg.clone()
                }
            })
            .collect();

        if !replaced {
            command_line.push(filename.to_string_lossy().into_owned());
        }

        Self {
            directory: self.directory.clone(),
            command_line,
            filename: filename.to_path_buf(),
        }
    }

    pub fn display_command(&self) -> String {
        self.command_line.join(" ")
    }
}
