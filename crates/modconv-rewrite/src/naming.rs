//! Module names for converted headers
//!
//! A header `dir/x.h` of module `M` becomes `M.x` (module units) or `M:x`
//! (partitions). The first header to ask for a name gets the short form;
//! a later header with the same file stem gets `M.resolved.dir.x` built
//! from its root-relative path. Names are memoized per file.

use crate::paths::relative_to_root;
use modconv_core::ConvertingMode;
use modconv_index::{FileId, FileRecord};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct ModuleNamer {
    mode: ConvertingMode,
    root: PathBuf,
    cache: HashMap<FileId, String>,
    generated: HashSet<String>,
}

impl ModuleNamer {
    pub fn new(mode: ConvertingMode, root: &Path) -> Self {
        Self {
            mode,
            root: root.to_path_buf(),
            cache: HashMap::new(),
            generated: HashSet::new(),
        }
    }

    fn separator(&self) -> Option<char> {
        match self.mode {
            ConvertingMode::RewriteHeadersToModules => Some('.'),
            ConvertingMode::RewriteHeadersToPartitions => Some(':'),
            ConvertingMode::HeaderWrapper => None,
        }
    }

    /// Name of the unit generated for `header`
    pub fn name_for_header(&mut self, id: FileId, header: &FileRecord) -> String {
        if !header.is_header() {
            debug!("Asking a header module name for source {}", header.path().display());
        }
        if let Some(name) = self.cache.get(&id) {
            return name.clone();
        }
        let Some(separator) = self.separator() else {
            debug!("Headers have no own module in header-wrapper mode");
            return header.module_name().to_string();
        };

        let prefix = format!("{}{}", header.module_name(), separator);
        let stem = header
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let simple = format!("{}{}", prefix, stem);

        let name = if self.generated.contains(&simple) {
            let relative = relative_to_root(header.path(), &self.root);
            let without_ext = Path::new(&relative).with_extension("");
            let mut resolved = format!("{}resolved", prefix);
            for part in without_ext.to_string_lossy().split('/') {
                resolved.push('.');
                resolved.push_str(part);
            }
            // The fallback is not checked again.
            if self.generated.contains(&resolved) {
                debug!(
                    "Two headers resolve to module name {}: {}",
                    resolved,
                    header.path().display()
                );
            }
            resolved
        } else {
            simple
        };

        self.generated.insert(name.clone());
        self.cache.insert(id, name.clone());
        name
    }

    /// Name to write in an import of `header` from a unit of `current_module`.
    ///
    /// Other logical modules are imported through their primary interface.
    /// A partition is imported as `:part` inside its own module.
    pub fn name_for_import(&mut self, id: FileId, header: &FileRecord, current_module: &str) -> String {
        if !current_module.is_empty() && current_module != header.module_name() {
            return header.module_name().to_string();
        }

        let name = self.name_for_header(id, header);
        match name.find(':') {
            Some(idx) => {
                let primary = &name[..idx];
                if primary == current_module {
                    name[idx..].to_string()
                } else {
                    primary.to_string()
                }
            }
            None => name,
        }
    }
}
