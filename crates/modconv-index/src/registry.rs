//! Interesting file registry
//!
//! Every header of a configured module and every source to rewrite gets one
//! [`FileRecord`], addressed by a stable [`FileId`]. Records are never
//! removed, so ids stay valid for the whole run and can be used as the
//! edges of the include graph.

use crate::patterns::find_matched_files;
use modconv_core::{ConverterConfig, Included, MacroUse, PreambleOffsets, ProcessedInfo};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle of a registered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(usize);

impl FileId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A header or source taking part in the conversion
#[derive(Debug, Clone)]
pub struct FileRecord {
    path: PathBuf,
    /// Empty for sources that only get their includes rewritten
    module_name: String,
    is_header: bool,
    non_interesting_users: BTreeSet<PathBuf>,
    info: Option<ProcessedInfo>,
    pub(crate) interesting_includes: Vec<FileId>,
    pub(crate) non_interesting_includes: Vec<Included>,
}

impl FileRecord {
    fn new(path: PathBuf, module_name: &str, is_header: bool) -> Self {
        Self {
            path,
            module_name: module_name.to_string(),
            is_header,
            non_interesting_users: BTreeSet::new(),
            info: None,
            interesting_includes: Vec::new(),
            non_interesting_includes: Vec::new(),
        }
    }

    /// Canonical path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn is_header(&self) -> bool {
        self.is_header
    }

    pub fn is_processed(&self) -> bool {
        self.info.is_some()
    }

    pub fn is_successfully_processed(&self) -> bool {
        self.info.as_ref().is_some_and(ProcessedInfo::is_success)
    }

    pub fn info(&self) -> Option<&ProcessedInfo> {
        self.info.as_ref()
    }

    pub fn preamble(&self) -> PreambleOffsets {
        match &self.info {
            Some(info) => info.preamble,
            None => {
                debug!("Querying the preamble of unprocessed {}", self.path.display());
                PreambleOffsets::default()
            }
        }
    }

    pub fn macro_uses(&self) -> &[MacroUse] {
        self.info
            .as_ref()
            .map(|i| i.directly_used_macros.as_slice())
            .unwrap_or_default()
    }

    pub fn directly_imported(&self) -> &[String] {
        self.info
            .as_ref()
            .map(|i| i.directly_imported.as_slice())
            .unwrap_or_default()
    }

    /// The file already tests the controlling macro
    pub fn has_controlling_macro(&self) -> bool {
        self.info.as_ref().is_some_and(|i| i.controlling_macro_detected)
    }

    pub fn has_module_declaration(&self) -> bool {
        self.info.as_ref().is_some_and(|i| i.has_module_declaration)
    }

    pub fn has_uninteresting_users(&self) -> bool {
        !self.non_interesting_users.is_empty()
    }

    /// One user outside the conversion, for diagnostics
    pub fn an_uninteresting_user(&self) -> Option<&Path> {
        self.non_interesting_users.iter().next().map(PathBuf::as_path)
    }

    /// Preamble includes resolved to registered files
    pub fn interesting_includes(&self) -> &[FileId] {
        &self.interesting_includes
    }

    /// Preamble includes outside the registry
    pub fn non_interesting_includes(&self) -> &[Included] {
        &self.non_interesting_includes
    }
}

/// Registry of interesting files plus the include sets of the
/// non-interesting headers they pull in
#[derive(Debug, Default)]
pub struct InterestingFileManager {
    files: Vec<FileRecord>,
    by_path: HashMap<PathBuf, FileId>,
    non_interesting: HashMap<PathBuf, BTreeSet<PathBuf>>,
}

impl InterestingFileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover and register the files selected by `config`
    pub fn calculate_interesting_files(config: &ConverterConfig) -> Self {
        let mut manager = Self::new();
        let root = &config.root_dir;

        for module in &config.modules {
            let headers = find_matched_files(root, &module.headers, &module.excluded_headers);
            manager.add_headers(&module.name, &headers);

            let srcs = find_matched_files(root, &module.srcs, &module.excluded_srcs);
            manager.add_srcs(&module.name, &srcs);
        }

        let srcs = find_matched_files(
            root,
            &config.srcs_to_rewrite,
            &config.srcs_excluded_to_rewrite,
        );
        manager.add_srcs("", &srcs);

        info!(
            "Found {} interesting files under {}",
            manager.len(),
            root.display()
        );
        manager
    }

    pub fn add_headers<'a>(&mut self, module_name: &str, headers: impl IntoIterator<Item = &'a PathBuf>) {
        for header in headers {
            self.register(module_name, header, true);
        }
    }

    pub fn add_srcs<'a>(&mut self, module_name: &str, srcs: impl IntoIterator<Item = &'a PathBuf>) {
        for src in srcs {
            self.register(module_name, src, false);
        }
    }

    /// Register `path`. A path registered before keeps its first record.
    pub fn register(&mut self, module_name: &str, path: &Path, is_header: bool) -> FileId {
        if let Some(&id) = self.by_path.get(path) {
            debug!(
                "{} is already registered for module '{}'",
                path.display(),
                self.files[id.0].module_name
            );
            return id;
        }

        let id = FileId(self.files.len());
        self.files
            .push(FileRecord::new(path.to_path_buf(), module_name, is_header));
        self.by_path.insert(path.to_path_buf(), id);
        id
    }

    /// `None` means the file is not interesting
    pub fn lookup(&self, path: &Path) -> Option<FileId> {
        self.by_path.get(path).copied()
    }

    pub fn get(&self, id: FileId) -> &FileRecord {
        &self.files[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: FileId) -> &mut FileRecord {
        &mut self.files[id.0]
    }

    /// Records in registration order
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &FileRecord)> {
        self.files.iter().enumerate().map(|(i, f)| (FileId(i), f))
    }

    pub fn ids(&self) -> impl Iterator<Item = FileId> {
        (0..self.files.len()).map(FileId)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn set_info(&mut self, id: FileId, info: ProcessedInfo) {
        let record = self.get_mut(id);
        if record.info.is_some() {
            debug!("{} was processed twice", record.path.display());
        }
        record.info = Some(info);
    }

    pub fn add_uninteresting_user(&mut self, id: FileId, user: &Path) {
        self.get_mut(id).non_interesting_users.insert(user.to_path_buf());
    }

    pub fn has_non_interesting_file(&self, path: &Path) -> bool {
        self.non_interesting.contains_key(path)
    }

    pub fn set_non_interesting_includes(&mut self, path: &Path, includes: impl IntoIterator<Item = PathBuf>) {
        self.non_interesting
            .entry(path.to_path_buf())
            .or_default()
            .extend(includes);
    }

    /// Whether `query` is transitively included by the non-interesting file
    pub fn is_file_included_by_non_interesting_file(&self, non_interesting: &Path, query: &Path) -> bool {
        self.non_interesting
            .get(non_interesting)
            .is_some_and(|includes| includes.contains(query))
    }
}
