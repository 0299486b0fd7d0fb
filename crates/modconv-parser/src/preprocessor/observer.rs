//! Preprocessing callbacks

use super::engine::Diagnostic;
use super::macros::MacroInfo;
use modconv_core::Location;
use std::path::PathBuf;

/// An `#include`, `#import` or `#include_next` seen by the preprocessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionEvent {
    /// Location of the `#`
    pub hash: Location,
    /// Spelling between the delimiters
    pub text: String,
    pub angled: bool,
    /// Canonical path of the included file, if it was found
    pub resolved: Option<PathBuf>,
    /// The directive is written in the main file
    pub in_main_file: bool,
}

/// Receives events while a translation unit is preprocessed.
///
/// All hooks have empty default implementations.
pub trait PreprocessObserver {
    /// Every inclusion directive in an active region, in any file
    fn inclusion_directive(&mut self, _event: &InclusionEvent) {}

    /// `import name;` in the main file; `name` is flattened, e.g. `a.b:c`
    fn module_import(&mut self, _location: &Location, _name: &str) {}

    /// `module name;` or `export module name;` in the main file
    fn module_declaration(&mut self, _location: &Location, _name: &str) {}

    /// `#ifndef` evaluated in the main file
    fn ifndef(&mut self, _location: &Location, _name: &str) {}

    /// A macro expanded in the main file at `location`
    fn macro_expands(&mut self, _location: &Location, _info: &MacroInfo) {}

    /// An error or warning raised while preprocessing
    fn diagnostic(&mut self, _diagnostic: &Diagnostic) {}
}
