//! Rewriting and generation
//!
//! Works on the analysed registry. For every interesting file, in
//! registration order:
//!
//! - headers get their preamble wrapped in `#ifndef <controlling macro>`
//!   when they stay on disk, and a module interface of their own unless
//!   the mode is header-wrapper
//! - sources get their preamble replaced by imports
//!
//! Then the per module interfaces, the `std` module and header removal.

use crate::buffer::{LineEnding, RewriteBuffer};
use crate::naming::ModuleNamer;
use crate::paths::{file_name_to_include, module_unit_path_for_header};
use modconv_core::{ConverterConfig, ModuleConfig, PreambleOffsets};
use modconv_index::{topological_sort, FileId, FileRecord, InterestingFileManager};
use modconv_knowledge::{StdModuleGenerator, ThirdPartyModules};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// What the rewriting pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Existing files rewritten in place
    pub rewritten: Vec<PathBuf>,
    /// Module units written
    pub generated: Vec<PathBuf>,
    /// Headers deleted after conversion
    pub removed: Vec<PathBuf>,
}

/// Turns analysed files into module code
#[derive(Debug)]
pub struct RewriterManager<'a> {
    pub(crate) config: &'a ConverterConfig,
    pub(crate) manager: &'a InterestingFileManager,
    pub(crate) third_party: &'a ThirdPartyModules,
    pub(crate) std_module: StdModuleGenerator,
    pub(crate) namer: ModuleNamer,
    headers_to_remove: Vec<FileId>,
    report: RewriteReport,
}

fn slice(text: &[u8], start: usize, end: usize) -> &[u8] {
    let end = end.min(text.len());
    if start >= end {
        return &[];
    }
    &text[start..end]
}

/// Write `content` to `path`, creating parent directories
fn write_file(path: &Path, content: impl AsRef<[u8]>) -> modconv_core::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// False when the preamble has nothing to rewrite
fn check_preamble(file: &FileRecord) -> bool {
    let preamble = file.preamble();
    if preamble.end < preamble.start {
        debug!(
            "Invalid preamble {}..{} in {}",
            preamble.start,
            preamble.end,
            file.path().display()
        );
        return false;
    }
    if preamble.is_empty() {
        info!(
            "No preamble found in {}. No need to rewrite",
            file.path().display()
        );
        return false;
    }
    true
}

impl<'a> RewriterManager<'a> {
    pub fn new(
        config: &'a ConverterConfig,
        manager: &'a InterestingFileManager,
        third_party: &'a ThirdPartyModules,
    ) -> Self {
        Self {
            config,
            manager,
            third_party,
            std_module: StdModuleGenerator::new(&ThirdPartyModules::user_std_patterns(
                &config.third_party_modules,
            )),
            namer: ModuleNamer::new(config.mode, &config.root_dir),
            headers_to_remove: Vec::new(),
            report: RewriteReport::default(),
        }
    }

    /// Run every rewriting job
    pub fn rewrite_interesting_files(mut self) -> RewriteReport {
        let (config, manager) = (self.config, self.manager);
        let mut headers_by_module: BTreeMap<String, Vec<FileId>> = BTreeMap::new();

        for (id, file) in manager.iter() {
            if !file.is_successfully_processed() {
                warn!(
                    "Skip {} due to it is not successfully processed.",
                    file.path().display()
                );
                continue;
            }

            let result = if file.is_header() {
                if file.module_name().is_empty() {
                    error!(
                        "All interesting headers should be in a module: {}",
                        file.path().display()
                    );
                    continue;
                }
                headers_by_module
                    .entry(file.module_name().to_string())
                    .or_default()
                    .push(id);
                self.convert_header(id)
            } else {
                self.rewrite_src(id)
            };

            if let Err(e) = result {
                error!("Failed to convert {}: {}", file.path().display(), e);
            }
        }

        for module in &config.modules {
            let headers = headers_by_module
                .get(&module.name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let result = if config.is_header_wrapper() {
                self.generate_header_wrapper(module, headers)
            } else {
                self.generate_primary_module_interface(module, headers)
            };
            if let Err(e) = result {
                error!("Failed to generate module {}: {}", module.name, e);
            }
        }

        if let Err(e) = self.generate_std_module() {
            error!("Failed to generate the std module: {}", e);
        }
        self.remove_headers();
        self.report
    }

    fn convert_header(&mut self, id: FileId) -> modconv_core::Result<()> {
        let manager = self.manager;
        let file = manager.get(id);
        // The module unit is built from the text before the guard goes in.
        let text = fs::read(file.path())?;

        // Wrapped headers are always kept, so they are always guarded.
        let stays = self.config.is_header_wrapper()
            || self.config.remain_headers
            || file.has_uninteresting_users();
        if stays {
            self.rewrite_header(id, &text)?;
        }
        if !self.config.is_header_wrapper() {
            self.generate_module_interface_for_header(id, &text)?;
        }
        Ok(())
    }

    /// Guard the preamble of a header that stays on disk
    fn rewrite_header(&mut self, id: FileId, text: &[u8]) -> modconv_core::Result<()> {
        let manager = self.manager;
        let file = manager.get(id);
        if !check_preamble(file) {
            return Ok(());
        }
        if file.has_controlling_macro() {
            info!(
                "NOTE: Skip rewriting {} due to it is already controlled by modules macro.",
                file.path().display()
            );
            return Ok(());
        }

        let preamble = file.preamble();
        let controlling_macro = &self.config.controlling_macro;
        let mut buffer = RewriteBuffer::new(text);
        buffer.insert_before(preamble.start, &format!("#ifndef {}\n", controlling_macro));
        buffer.insert_before(preamble.end, &format!("#endif // {}\n\n", controlling_macro));
        write_file(file.path(), buffer.render())?;

        info!("Rewrote header: {}", file.path().display());
        self.report.rewritten.push(file.path().to_path_buf());
        Ok(())
    }

    /// Replace the preamble of a source with imports
    fn rewrite_src(&mut self, id: FileId) -> modconv_core::Result<()> {
        let manager = self.manager;
        let file = manager.get(id);
        if !check_preamble(file) {
            return Ok(());
        }
        if file.has_module_declaration() {
            info!(
                "Skip rewriting {} since it already declares a module",
                file.path().display()
            );
            return Ok(());
        }

        let preamble = file.preamble();
        if preamble.controlling_macro.is_some() {
            warn!(
                "Source file {} looks guarded by an include guard",
                file.path().display()
            );
        }

        let module_name = file.module_name();
        let mut prefix = self.unhandled_includes(&[id]);
        prefix.push_str(&self.macro_warnings(&[id], false));
        if !module_name.is_empty() {
            if !prefix.is_empty() {
                prefix.insert_str(0, "module;\n");
            }
            prefix.push_str(&format!("module {};\n", module_name));
        }
        let imports = self.imports_section(&[id], module_name);

        let mut buffer = RewriteBuffer::new(fs::read(file.path())?);
        buffer.insert_before(preamble.start, &prefix);
        buffer.replace(preamble.start, preamble.end - preamble.start, &imports);
        if !module_name.is_empty() && self.config.keep_traditional_abi {
            buffer.insert_after(preamble.end, "extern \"C++\" {\n");
            buffer.insert_at_last("\n} // extern \"C++\"");
        }
        write_file(file.path(), buffer.render())?;

        info!("Rewrote srcs: {}", file.path().display());
        self.report.rewritten.push(file.path().to_path_buf());
        Ok(())
    }

    /// The module interface (or partition) generated for one header
    fn generate_module_interface_for_header(&mut self, id: FileId, text: &[u8]) -> modconv_core::Result<()> {
        let (config, manager) = (self.config, self.manager);
        let file = manager.get(id);
        let module_name = file.module_name();
        let unit_name = self.namer.name_for_header(id, file);
        let unit_path = module_unit_path_for_header(config, module_name, file.path());
        let preamble: PreambleOffsets = file.preamble();
        let controlling_macro = &config.controlling_macro;

        let mut out = Vec::with_capacity(text.len() + 256);
        match preamble.controlling_macro {
            Some(guard) => {
                out.extend_from_slice(slice(text, 0, guard.def_start));
                out.extend_from_slice(slice(text, guard.def_end, preamble.start));
            }
            None => out.extend_from_slice(slice(text, 0, preamble.start)),
        }

        let mut generated = self.macro_warnings(&[id], false);
        let unhandled = self.unhandled_includes(&[id]);
        if !unhandled.is_empty() {
            generated.push_str("module;\n");
            generated.push_str(&unhandled);
            generated.push('\n');
        }
        generated.push_str(&format!("export module {};\n", unit_name));
        generated.push_str(&self.imports_section(&[id], module_name));

        if config.remain_headers {
            generated.push_str(&format!("#define {}\n", controlling_macro));
        }
        generated.push_str("export ");
        if config.keep_traditional_abi {
            generated.push_str("extern \"C++\" ");
        }
        generated.push_str("{\n");
        if config.remain_headers {
            generated.push_str(&format!(
                "#include \"{}\"\n",
                file_name_to_include(&unit_path, file.path(), &config.root_dir)
            ));
        }

        // Generated lines follow the line terminator of the header.
        let line_ending = LineEnding::detect(text);
        out.extend_from_slice(line_ending.apply(&generated).as_bytes());
        if !config.remain_headers {
            let body_end = preamble
                .controlling_macro
                .map(|guard| guard.endif)
                .unwrap_or(text.len());
            out.extend_from_slice(slice(text, preamble.end, body_end));
        }
        out.extend_from_slice(line_ending.apply("}\n").as_bytes());

        self.emit(&unit_path, &out)?;
        self.headers_to_remove.push(id);
        info!(
            "Generated module interface '{}' for header {} at {}",
            unit_name,
            file.path().display(),
            unit_path.display()
        );
        Ok(())
    }

    /// One module interface textually including every header of `module`
    fn generate_header_wrapper(&mut self, module: &ModuleConfig, headers: &[FileId]) -> modconv_core::Result<()> {
        let (config, manager) = (self.config, self.manager);
        let headers = topological_sort(manager, headers);
        let path = config.root_dir.join(&module.path);
        let controlling_macro = &config.controlling_macro;

        let mut out = self.macro_warnings(&headers, true);
        let unhandled = self.unhandled_includes(&headers);
        if !unhandled.is_empty() {
            out.push_str("module;\n");
            out.push_str(&unhandled);
            out.push('\n');
        }
        out.push_str(&format!("export module {};\n", module.name));
        out.push_str(&self.imports_section(&headers, &module.name));
        out.push_str(&format!("#define {}\n", controlling_macro));
        out.push_str("export extern \"C++\" {\n");
        for &id in &headers {
            out.push_str(&format!(
                "  #include \"{}\"\n",
                file_name_to_include(&path, manager.get(id).path(), &config.root_dir)
            ));
        }
        out.push_str("}\n");

        self.emit(&path, &out)?;
        info!("Generated header wrapper for module {} at {}", module.name, path.display());
        Ok(())
    }

    /// Primary interface re-exporting the units of every header
    fn generate_primary_module_interface(
        &mut self,
        module: &ModuleConfig,
        headers: &[FileId],
    ) -> modconv_core::Result<()> {
        let manager = self.manager;
        let path = self.config.root_dir.join(&module.path);
        let mut out = format!("export module {};\n", module.name);
        for &id in headers {
            let name = self.namer.name_for_import(id, manager.get(id), &module.name);
            out.push_str(&format!("export import {};\n", name));
        }

        self.emit(&path, &out)?;
        info!("Generated primary module interface for {} at {}", module.name, path.display());
        Ok(())
    }

    fn generate_std_module(&mut self) -> modconv_core::Result<()> {
        if self.config.is_std_module_available || !self.std_module.is_used() {
            return Ok(());
        }
        let Some(path) = self.config.std_module_path.clone() else {
            warn!("The std module is used but no path is given to generate it");
            return Ok(());
        };

        let content = self.std_module.render();
        self.emit(&path, &content)?;
        info!("Generated std module at {}", path.display());
        Ok(())
    }

    fn emit(&mut self, path: &Path, content: impl AsRef<[u8]>) -> modconv_core::Result<()> {
        if path.exists() {
            warn!("{} already exists, it will be overriden.", path.display());
        }
        write_file(path, content)?;
        self.report.generated.push(path.to_path_buf());
        Ok(())
    }

    fn remove_headers(&mut self) {
        if self.config.remain_headers {
            return;
        }

        for &id in &self.headers_to_remove {
            let file = self.manager.get(id);
            if let Some(user) = file.an_uninteresting_user() {
                info!(
                    "{} has uninteresting users. e.g., {}",
                    file.path().display(),
                    user.display()
                );
                continue;
            }
            match fs::remove_file(file.path()) {
                Ok(()) => {
                    info!("removed {}", file.path().display());
                    self.report.removed.push(file.path().to_path_buf());
                }
                Err(e) => error!("Failed to remove {}: {}", file.path().display(), e),
            }
        }
    }
}
