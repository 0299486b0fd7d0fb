//! Analysis passes
//!
//! Fills every registered file with its [`ProcessedInfo`]:
//!
//! 1. Files of the compilation database are preprocessed with their own
//!    commands. Registered headers they reach are then preprocessed with the
//!    command of their first includer.
//! 2. Files still unprocessed use the default command of the config.
//! 3. Non-interesting headers that no module provides are preprocessed
//!    once more to learn what they include, for macro diagnostics.
//!
//! Preprocessing runs in parallel; results are applied to the registry in
//! a fixed order afterwards.
//!
//! [`ProcessedInfo`]: modconv_core::ProcessedInfo

use crate::graph::NonModuleHeaders;
use crate::registry::{FileId, InterestingFileManager};
use modconv_core::{CompileCommand, ConverterConfig};
use modconv_knowledge::ThirdPartyModules;
use modconv_parser::{CompilationDatabase, DependencyExtractor, Preprocessed};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Compiler name put in front of default commands
const DEFAULT_COMPILER: &str = "clang++";

/// Outcome of the analysis passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    /// Files analysed successfully
    pub analysed: usize,
    /// Files whose analysis failed
    pub failed: usize,
    /// Non-interesting headers preprocessed for reachability
    pub non_module_headers: usize,
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// The command used for files without a compilation database entry
pub fn default_command(config: &ConverterConfig, file: &Path, is_header: bool) -> CompileCommand {
    let mut command_line = Vec::with_capacity(config.default_command_line.len() + 4);
    command_line.push(DEFAULT_COMPILER.to_string());
    command_line.extend(config.default_command_line.iter().cloned());
    command_line.push("-E".to_string());
    command_line.push(if is_header { "-xc++-header" } else { "-xc++" }.to_string());
    command_line.push(file.to_string_lossy().into_owned());
    CompileCommand::new(config.root_dir.clone(), command_line, file)
}

impl InterestingFileManager {
    /// Run every analysis pass over the registry
    pub fn process_interesting_files(
        &mut self,
        config: &ConverterConfig,
        third_party: &ThirdPartyModules,
    ) -> AnalysisSummary {
        let extractor = DependencyExtractor::new(config.controlling_macro.clone());
        let mut found = NonModuleHeaders::new();

        if let Some(path) = &config.compilation_database {
            match CompilationDatabase::load(path) {
                Ok(db) => self.process_with_compilation_database(&db, &extractor, third_party, &mut found),
                Err(e) => error!("{}", e),
            }
        }

        let pending: Vec<(FileId, CompileCommand)> = self
            .iter()
            .filter(|(_, f)| !f.is_processed())
            .map(|(id, f)| (id, default_command(config, f.path(), f.is_header())))
            .collect();
        info!("Preprocessing {} files with the default command", pending.len());
        self.process_pending(pending, &extractor, third_party, &mut found);

        let non_module_headers = self.process_non_module_headers(&found, &extractor);

        let mut summary = AnalysisSummary {
            non_module_headers,
            ..Default::default()
        };
        for (_, file) in self.iter() {
            if file.is_successfully_processed() {
                summary.analysed += 1;
            } else {
                summary.failed += 1;
            }
        }
        info!(
            "Analysed {} files, {} failed, {} non-module headers inspected",
            summary.analysed, summary.failed, summary.non_module_headers
        );
        summary
    }

    fn process_with_compilation_database(
        &mut self,
        db: &CompilationDatabase,
        extractor: &DependencyExtractor,
        third_party: &ThirdPartyModules,
        found: &mut NonModuleHeaders,
    ) {
        // An interesting file is analysed with its first command only.
        let mut seen = HashSet::new();
        let jobs: Vec<(&CompileCommand, PathBuf, Option<FileId>)> = db
            .all_commands()
            .iter()
            .filter_map(|command| {
                let file = canonical(&command.filename);
                let id = self.lookup(&file);
                if let Some(id) = id {
                    if !seen.insert(id) {
                        return None;
                    }
                }
                Some((command, file, id))
            })
            .collect();
        info!("Preprocessing {} entries of the compilation database", jobs.len());

        let results: Vec<Preprocessed> = jobs
            .par_iter()
            .map(|(command, file, _)| extractor.preprocess_file(file, command))
            .collect();

        let mut reached: BTreeMap<FileId, CompileCommand> = BTreeMap::new();
        for ((command, file, id), result) in jobs.into_iter().zip(results) {
            if let Some(id) = id {
                self.set_processed_info(id, result.info, command, third_party, found);
            }

            for header in &result.all_includes {
                let Some(header_id) = self.lookup(header) else {
                    continue;
                };
                if !self.get(header_id).is_header() {
                    warn!(
                        "Find non-header {} when processing {}",
                        header.display(),
                        file.display()
                    );
                }
                reached
                    .entry(header_id)
                    .or_insert_with(|| command.retarget(header));
                if id.is_none() {
                    self.add_uninteresting_user(header_id, &file);
                }
            }
        }

        let pending: Vec<(FileId, CompileCommand)> = reached
            .into_iter()
            .filter(|(id, _)| !self.get(*id).is_processed())
            .collect();
        self.process_pending(pending, extractor, third_party, found);
    }

    fn process_pending(
        &mut self,
        pending: Vec<(FileId, CompileCommand)>,
        extractor: &DependencyExtractor,
        third_party: &ThirdPartyModules,
        found: &mut NonModuleHeaders,
    ) {
        let results: Vec<Preprocessed> = pending
            .par_iter()
            .map(|(id, command)| extractor.preprocess_file(self.get(*id).path(), command))
            .collect();

        for ((id, command), result) in pending.into_iter().zip(results) {
            self.set_processed_info(id, result.info, &command, third_party, found);
        }
    }

    fn process_non_module_headers(
        &mut self,
        found: &NonModuleHeaders,
        extractor: &DependencyExtractor,
    ) -> usize {
        let jobs: Vec<(&PathBuf, CompileCommand)> = found
            .iter()
            .filter(|(path, _)| !self.has_non_interesting_file(path))
            .map(|(path, command)| (path, command.retarget(path)))
            .collect();

        let results: Vec<Preprocessed> = jobs
            .par_iter()
            .map(|(path, command)| extractor.preprocess_file(path, command))
            .collect();

        let count = jobs.len();
        for ((path, _), result) in jobs.into_iter().zip(results) {
            self.set_non_interesting_includes(path, result.all_includes);
        }
        count
    }
}
