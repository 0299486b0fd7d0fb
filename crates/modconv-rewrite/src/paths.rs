//! Where generated units go and how they refer to headers

use modconv_core::ConverterConfig;
use modconv_index::relative_slash_path;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of generated module interface units
pub const MODULE_UNIT_EXTENSION: &str = "cppm";

/// `path` relative to the root, `/` separated
pub fn relative_to_root(path: &Path, root: &Path) -> String {
    match relative_slash_path(path, root) {
        Some(relative) => relative,
        None => {
            debug!("{} is not below {}", path.display(), root.display());
            path.to_string_lossy().into_owned()
        }
    }
}

/// Path of the module unit generated for `header` of `module_name`.
///
/// The prefix map of the module is applied to the root-relative path.
pub fn module_unit_path_for_header(config: &ConverterConfig, module_name: &str, header: &Path) -> PathBuf {
    let relative = relative_to_root(header, &config.root_dir);
    let mapped = config.mapped_path_for_module_units_of_headers(module_name, &relative);
    config
        .root_dir
        .join(mapped)
        .with_extension(MODULE_UNIT_EXTENSION)
}

/// Spelling of `to_include` in an `#include` written into `current_file`
pub fn file_name_to_include(current_file: &Path, to_include: &Path, root: &Path) -> String {
    let current_dir = current_file.parent().unwrap_or(Path::new(""));
    let include_dir = to_include.parent().unwrap_or(Path::new(""));

    if current_dir == include_dir {
        if let Some(name) = to_include.file_name() {
            return name.to_string_lossy().into_owned();
        }
    }

    let base = if include_dir.starts_with(current_dir) {
        current_dir
    } else {
        root
    };
    match pathdiff::diff_paths(to_include, base) {
        Some(relative) => relative.to_string_lossy().into_owned(),
        None => to_include.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_name_to_include() {
        let root = Path::new("/w");
        assert_eq!(
            file_name_to_include(Path::new("/w/include/a.cppm"), Path::new("/w/include/a.h"), root),
            "a.h"
        );
        assert_eq!(
            file_name_to_include(Path::new("/w/a.cppm"), Path::new("/w/include/x/a.h"), root),
            "include/x/a.h"
        );
        assert_eq!(
            file_name_to_include(Path::new("/w/module/a.cppm"), Path::new("/w/include/a.h"), root),
            "include/a.h"
        );
    }

    #[test]
    fn test_relative_to_root() {
        assert_eq!(relative_to_root(Path::new("/w/include/a.h"), Path::new("/w")), "include/a.h");
        assert_eq!(relative_to_root(Path::new("/x/a.h"), Path::new("/w")), "/x/a.h");
    }

    #[test]
    fn test_module_unit_path_for_header() {
        let config = ConverterConfig::from_yaml_str(
            "modules:\n  - name: a\n    path: a.cppm\n    prefix_map_of_module_units_for_headers: include:module\n\
             mode: rewrite-headers-to-module-units\ncontrolling_macro: M\nis_std_module_available: true\n",
            Path::new("/nonexistent-root/config.yml"),
        )
        .unwrap();
        let root = Path::new("/nonexistent-root");
        assert_eq!(
            module_unit_path_for_header(&config, "a", &root.join("include/x/a.h")),
            root.join("module/x/a.cppm")
        );
        assert_eq!(
            module_unit_path_for_header(&config, "b", &root.join("include/b.h")),
            root.join("include/b.cppm")
        );
    }
}
