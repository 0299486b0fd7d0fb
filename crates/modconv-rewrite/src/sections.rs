//! Shared pieces of generated text
//!
//! Import lists, diagnostics for macros that do not cross module
//! boundaries and the global module fragment holding includes no module
//! provides.

use crate::emitter::RewriterManager;
use modconv_core::Included;
use modconv_index::FileId;
use std::collections::HashSet;
use std::path::Path;

const MACRO_WARNING_HEADER: &str = "// There unhandled macro uses found in the body:\n";

const UNHANDLED_INCLUDES_WARNING: &str = "\
// WARNING: Detected unhandled non interesting includes.
// It is not suggested mix includes and imports from the compiler's
// perspective. Since it may introduce redeclarations within different
// translation units and the compiler is not able to handle such patterns
// efficiently.
//
// See https://clang.llvm.org/docs/StandardCPlusPlusModules.html#performance-tips
";

/// Insertion ordered set of module names
#[derive(Debug, Default)]
struct ImportSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ImportSet {
    fn push(&mut self, name: String) {
        if name.is_empty() {
            return;
        }
        if self.seen.insert(name.clone()) {
            self.names.push(name);
        }
    }
}

impl RewriterManager<'_> {
    /// External module providing `include`. Marks the `std` module used.
    pub(crate) fn third_party_module(&mut self, include: &Included) -> Option<String> {
        let found = self.third_party.lookup(&include.text)?;
        if found.is_std {
            self.std_module.mark_used(&include.text);
        }
        Some(found.module.to_string())
    }

    /// `import X;` lines replacing the includes of `files`
    pub(crate) fn imports_section(&mut self, files: &[FileId], current_module: &str) -> String {
        let mut imports = ImportSet::default();
        let header_wrapper = self.config.is_header_wrapper();

        for &id in files {
            let record = self.manager.get(id);
            for &dep in record.interesting_includes() {
                let dep_record = self.manager.get(dep);
                let name = if header_wrapper {
                    dep_record.module_name().to_string()
                } else {
                    self.namer.name_for_import(dep, dep_record, current_module)
                };
                imports.push(name);
            }

            for include in record.non_interesting_includes() {
                if let Some(module) = self.third_party_module(include) {
                    imports.push(module);
                }
            }

            for imported in record.directly_imported() {
                imports.push(imported.clone());
            }
        }

        imports
            .names
            .iter()
            .filter(|name| name.as_str() != current_module)
            .map(|name| format!("import {};\n", name))
            .collect()
    }

    /// Comments listing body macros that imports will no longer provide.
    ///
    /// Macros coming from headers that stay textually included are fine.
    /// With `skip_in_files`, macros defined in `files` themselves are too.
    pub(crate) fn macro_warnings(&self, files: &[FileId], skip_in_files: bool) -> String {
        let non_module_headers: Vec<&Path> = files
            .iter()
            .flat_map(|&id| self.manager.get(id).non_interesting_includes())
            .filter(|include| self.third_party.lookup(&include.text).is_none())
            .filter_map(|include| include.resolved.as_deref())
            .collect();
        let own_paths: HashSet<&Path> = files.iter().map(|&id| self.manager.get(id).path()).collect();

        let mut handled: HashSet<&str> = HashSet::new();
        let mut warnings = String::new();
        for &id in files {
            for used in self.manager.get(id).macro_uses() {
                if !handled.insert(used.name.as_str()) {
                    continue;
                }
                if skip_in_files && own_paths.contains(used.def_file.as_path()) {
                    continue;
                }
                let reachable = non_module_headers.iter().any(|header| {
                    *header == used.def_file
                        || self
                            .manager
                            .is_file_included_by_non_interesting_file(header, &used.def_file)
                });
                if reachable {
                    continue;
                }
                warnings.push_str(&format!("//\t'{}' defined in {}\n", used.name, used.def_loc));
            }
        }

        if warnings.is_empty() {
            return String::new();
        }
        format!("{}{}", MACRO_WARNING_HEADER, warnings)
    }

    /// Includes of `files` that no module provides, kept as includes
    pub(crate) fn unhandled_includes(&self, files: &[FileId]) -> String {
        let mut seen = HashSet::new();
        let mut lines = String::new();
        for &id in files {
            for include in self.manager.get(id).non_interesting_includes() {
                if self.third_party.lookup(&include.text).is_some() {
                    continue;
                }
                if seen.insert(include.text.as_str()) {
                    lines.push_str(&include.directive());
                    lines.push('\n');
                }
            }
        }

        if lines.is_empty() {
            return String::new();
        }
        format!("{}{}", UNHANDLED_INCLUDES_WARNING, lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modconv_core::{
        CompileCommand, ConverterConfig, Location, MacroUse, PreambleOffsets, ProcessedInfo,
    };
    use modconv_index::{InterestingFileManager, NonModuleHeaders};
    use modconv_knowledge::ThirdPartyModules;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn config(mode: &str) -> ConverterConfig {
        let yaml = format!(
            "mode: {}\ncontrolling_macro: USE_MODULES\nis_std_module_available: true\n\
             third_party_modules:\n  - name: third_party\n    headers: third_party/.*\n",
            mode
        );
        ConverterConfig::from_yaml_str(&yaml, Path::new("/w/config.yml")).unwrap()
    }

    fn third_party(config: &ConverterConfig) -> ThirdPartyModules {
        ThirdPartyModules::new(&config.third_party_modules).unwrap()
    }

    fn info(includes: &[(&str, Option<&str>)], macros: &[(&str, &str)], imported: &[&str]) -> ProcessedInfo {
        ProcessedInfo {
            preamble: PreambleOffsets::new(0, 10),
            directly_included: includes
                .iter()
                .map(|(text, resolved)| Included::new(resolved.map(PathBuf::from), *text, false))
                .collect(),
            directly_used_macros: macros
                .iter()
                .map(|(name, file)| MacroUse {
                    name: name.to_string(),
                    def_file: PathBuf::from(file),
                    use_loc: Location::new("/w/a.h", 20, 3, 1),
                    def_loc: Location::new(*file, 8, 1, 9),
                })
                .collect(),
            directly_imported: imported.iter().map(|s| s.to_string()).collect(),
            succeeded: true,
            ..Default::default()
        }
    }

    /// a.h (module a) includes b.h (module b), c.h (module a), a third
    /// party header, `<vector>` and a plain header.
    fn manager(tp: &ThirdPartyModules) -> (InterestingFileManager, FileId) {
        let mut manager = InterestingFileManager::new();
        let a = manager.register("a", Path::new("/w/a.h"), true);
        let b = manager.register("b", Path::new("/w/b.h"), true);
        let c = manager.register("a", Path::new("/w/c.h"), true);
        let command = CompileCommand::new("/w", vec!["clang++".into()], Path::new("/w/x.cc"));
        let mut found = NonModuleHeaders::new();
        manager.set_processed_info(
            a,
            info(
                &[
                    ("b.h", Some("/w/b.h")),
                    ("c.h", Some("/w/c.h")),
                    ("third_party/t.h", Some("/w/third_party/t.h")),
                    ("vector", None),
                    ("plain.h", Some("/w/plain.h")),
                    ("plain.h", Some("/w/plain.h")),
                ],
                &[
                    ("FROM_B", "/w/b.h"),
                    ("FROM_C", "/w/c.h"),
                    ("FROM_PLAIN", "/w/plain.h"),
                    ("FROM_DEEP", "/w/deep.h"),
                    ("FROM_B", "/w/b.h"),
                ],
                &["extra"],
            ),
            &command,
            tp,
            &mut found,
        );
        for id in [b, c] {
            manager.set_processed_info(id, info(&[], &[], &[]), &command, tp, &mut found);
        }
        manager.set_non_interesting_includes(Path::new("/w/plain.h"), vec![PathBuf::from("/w/deep.h")]);
        (manager, a)
    }

    #[test]
    fn test_imports_section_for_module_units() {
        let config = config("rewrite-headers-to-module-units");
        let tp = third_party(&config);
        let (manager, a) = manager(&tp);
        let mut rewriter = RewriterManager::new(&config, &manager, &tp);

        assert_eq!(
            rewriter.imports_section(&[a], "a"),
            "import b;\nimport a.c;\nimport third_party;\nimport std;\nimport extra;\n"
        );
        assert!(rewriter.std_module.is_used());
    }

    #[test]
    fn test_imports_section_for_header_wrapper() {
        let config = config("header-wrapper");
        let tp = third_party(&config);
        let (manager, a) = manager(&tp);
        let mut rewriter = RewriterManager::new(&config, &manager, &tp);

        // c.h belongs to the current module.
        assert_eq!(
            rewriter.imports_section(&[a], "a"),
            "import b;\nimport third_party;\nimport std;\nimport extra;\n"
        );
    }

    #[test]
    fn test_macro_warnings() {
        let config = config("header-wrapper");
        let tp = third_party(&config);
        let (manager, a) = manager(&tp);
        let rewriter = RewriterManager::new(&config, &manager, &tp);

        let c = manager.lookup(Path::new("/w/c.h")).unwrap();
        assert_eq!(
            rewriter.macro_warnings(&[a], false),
            "// There unhandled macro uses found in the body:\n\
             //\t'FROM_B' defined in /w/b.h:1:9\n\
             //\t'FROM_C' defined in /w/c.h:1:9\n"
        );
        assert_eq!(
            rewriter.macro_warnings(&[a, c], true),
            "// There unhandled macro uses found in the body:\n\
             //\t'FROM_B' defined in /w/b.h:1:9\n"
        );
        assert_eq!(rewriter.macro_warnings(&[c], false), "");
    }

    #[test]
    fn test_unhandled_includes() {
        let config = config("header-wrapper");
        let tp = third_party(&config);
        let (manager, a) = manager(&tp);
        let rewriter = RewriterManager::new(&config, &manager, &tp);

        let section = rewriter.unhandled_includes(&[a]);
        assert!(section.starts_with("// WARNING: Detected unhandled non interesting includes.\n"));
        assert!(section.ends_with("// See https://clang.llvm.org/docs/StandardCPlusPlusModules.html#performance-tips\n#include \"plain.h\"\n"));
        assert_eq!(section.matches("#include").count(), 1);

        let b = manager.lookup(Path::new("/w/b.h")).unwrap();
        assert_eq!(rewriter.unhandled_includes(&[b]), "");
    }
}
