//! Dependency extraction
//!
//! Preprocesses one file with a compile command and turns the observed
//! events into a [`ProcessedInfo`].

use crate::lexer::decode_source;
use crate::preamble::scan_text;
use crate::preprocessor::{
    CompilerInvocation, Diagnostic, InclusionEvent, MacroInfo, MacroOrigin, PreprocessObserver,
    Preprocessor, Severity,
};
use modconv_core::{CompileCommand, Included, Location, MacroUse, ProcessedInfo};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Result of preprocessing one file
#[derive(Debug, Clone, Default)]
pub struct Preprocessed {
    pub info: ProcessedInfo,
    /// Every file entered while preprocessing, in any depth
    pub all_includes: Vec<PathBuf>,
}

impl Preprocessed {
    fn failed() -> Self {
        Self {
            info: ProcessedInfo::failed(),
            all_includes: Vec::new(),
        }
    }
}

/// Collects the facts of the main file
struct Collector<'a> {
    main_file: PathBuf,
    preamble_end: usize,
    controlling_macro: &'a str,
    all_includes: Vec<PathBuf>,
    directly_included: Vec<Included>,
    directly_imported: Vec<String>,
    used_macros: Vec<MacroUse>,
    controlling_macro_detected: bool,
    has_module_declaration: bool,
}

impl PreprocessObserver for Collector<'_> {
    fn inclusion_directive(&mut self, event: &InclusionEvent) {
        match &event.resolved {
            Some(path) => self.all_includes.push(path.clone()),
            None => warn!(
                "Failed to get the actual file for including '{}' in {}",
                event.text, event.hash
            ),
        }

        // Includes in included headers and after the preamble are not ours.
        if !event.in_main_file || event.hash.offset >= self.preamble_end {
            return;
        }
        self.directly_included.push(Included::new(
            event.resolved.clone(),
            event.text.clone(),
            event.angled,
        ));
    }

    fn module_import(&mut self, _location: &Location, name: &str) {
        self.directly_imported.push(name.to_string());
    }

    fn module_declaration(&mut self, _location: &Location, _name: &str) {
        self.has_module_declaration = true;
    }

    fn ifndef(&mut self, _location: &Location, name: &str) {
        if name == self.controlling_macro {
            self.controlling_macro_detected = true;
        }
    }

    fn macro_expands(&mut self, location: &Location, info: &MacroInfo) {
        // Builtin and command line macros have no file to blame.
        let MacroOrigin::File(def_loc) = &info.origin else {
            return;
        };
        // Uses inside the preamble go away with it.
        if location.file != self.main_file || location.offset < self.preamble_end {
            return;
        }
        if def_loc.file == self.main_file {
            return;
        }
        self.used_macros.push(MacroUse {
            name: info.name.clone(),
            def_file: def_loc.file.clone(),
            use_loc: location.clone(),
            def_loc: def_loc.clone(),
        });
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        debug!("{}", diagnostic);
    }
}

/// Preprocesses files for the converter
#[derive(Debug, Clone)]
pub struct DependencyExtractor {
    controlling_macro: String,
}

impl DependencyExtractor {
    /// `controlling_macro` is the macro guarding converted headers
    pub fn new(controlling_macro: impl Into<String>) -> Self {
        Self {
            controlling_macro: controlling_macro.into(),
        }
    }

    /// Preprocess `file` with `command` and collect what it depends on
    pub fn preprocess_file(&self, file: &Path, command: &CompileCommand) -> Preprocessed {
        let invocation =
            match CompilerInvocation::from_command_line(&command.command_line, &command.directory) {
                Ok(inv) => inv,
                Err(e) => {
                    error!(
                        "failed to create compiler invocation from command line: {} ({})",
                        command.display_command(),
                        e
                    );
                    return Preprocessed::failed();
                }
            };

        let text = match std::fs::read(file) {
            Ok(bytes) => decode_source(&bytes),
            Err(e) => {
                error!("failed to get contents from {}: {}", file.display(), e);
                return Preprocessed::failed();
            }
        };
        let mut preamble = scan_text(&text).offsets;

        let main_file = invocation
            .input
            .canonicalize()
            .unwrap_or_else(|_| invocation.input.clone());
        let mut collector = Collector {
            main_file,
            preamble_end: preamble.end,
            controlling_macro: &self.controlling_macro,
            all_includes: Vec::new(),
            directly_included: Vec::new(),
            directly_imported: Vec::new(),
            used_macros: Vec::new(),
            controlling_macro_detected: false,
            has_module_declaration: false,
        };

        let mut preprocessor = Preprocessor::new(invocation);
        if let Err(e) = preprocessor.run(&mut collector) {
            error!("failed to preprocess {}: {}", file.display(), e);
            return Preprocessed::failed();
        }

        if preprocessor.has_errors() {
            let first = preprocessor
                .diagnostics()
                .iter()
                .find(|d| d.severity == Severity::Error);
            error!(
                "Error happened during preprocessing {}; Commands: {}{}",
                file.display(),
                command.display_command(),
                first.map(|d| format!("; {}", d)).unwrap_or_default()
            );
        }

        // A file including nothing is most likely a root header holding
        // macro definitions only: treat it as having no preamble.
        if collector.directly_included.is_empty() {
            warn!(
                "Find no includes in {}. Treat it as if there is no preamble.",
                file.display()
            );
            preamble.collapse();
        }

        Preprocessed {
            info: ProcessedInfo {
                preamble,
                directly_imported: collector.directly_imported,
                directly_included: collector.directly_included,
                directly_used_macros: collector.used_macros,
                controlling_macro_detected: collector.controlling_macro_detected,
                has_module_declaration: collector.has_module_declaration,
                succeeded: true,
            },
            all_includes: collector.all_includes,
        }
    }
}
