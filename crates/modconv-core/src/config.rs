//! Configuration types
//!
//! The converter is driven by one YAML document. It is deserialized into raw
//! structs first and then validated into [`ConverterConfig`], which resolves
//! defaults relative to the config file.

use crate::cmdline::split_command_line;
use crate::error::ConfigError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How headers are turned into modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConvertingMode {
    /// One module per logical module, textually including its headers
    HeaderWrapper,
    /// One named module per header (`M.header`)
    #[serde(rename = "rewrite-headers-to-module-units")]
    RewriteHeadersToModules,
    /// One partition per header (`M:header`)
    #[serde(rename = "rewrite-headers-to-partitions")]
    RewriteHeadersToPartitions,
}

impl ConvertingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvertingMode::HeaderWrapper => "header-wrapper",
            ConvertingMode::RewriteHeadersToModules => "rewrite-headers-to-module-units",
            ConvertingMode::RewriteHeadersToPartitions => "rewrite-headers-to-partitions",
        }
    }
}

impl std::str::FromStr for ConvertingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header-wrapper" => Ok(ConvertingMode::HeaderWrapper),
            "rewrite-headers-to-module-units" => Ok(ConvertingMode::RewriteHeadersToModules),
            "rewrite-headers-to-partitions" => Ok(ConvertingMode::RewriteHeadersToPartitions),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for ConvertingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical module of the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Module name
    pub name: String,
    /// Path of the primary module interface, relative to the root
    pub path: String,
    /// Wildcard patterns of member headers
    pub headers: Vec<String>,
    pub excluded_headers: Vec<String>,
    /// Wildcard patterns of implementation sources
    pub srcs: Vec<String>,
    pub excluded_srcs: Vec<String>,
    /// `(old, new)` prefixes applied to generated module unit paths
    pub prefix_map: Vec<(String, String)>,
}

/// An externally provided module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPartyModuleConfig {
    /// Module name to import
    pub name: String,
    /// Regexes matched against the include text
    pub headers: Vec<String>,
}

/// Validated converter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Absolute, canonical project root
    pub root_dir: PathBuf,
    pub modules: Vec<ModuleConfig>,
    /// User declared third party modules
    pub third_party_modules: Vec<ThirdPartyModuleConfig>,
    pub mode: ConvertingMode,
    /// Macro guarding the traditional include path
    pub controlling_macro: String,
    pub remain_headers: bool,
    pub keep_traditional_abi: bool,
    pub is_std_module_available: bool,
    /// Where to synthesize the std module, set when it is not available
    pub std_module_path: Option<PathBuf>,
    /// Absolute path of the compilation database
    pub compilation_database: Option<PathBuf>,
    pub srcs_to_rewrite: Vec<String>,
    pub srcs_excluded_to_rewrite: Vec<String>,
    /// Extra arguments for files without a compilation database entry
    pub default_command_line: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    root_dir: Option<String>,
    #[serde(default)]
    modules: Vec<RawModuleConfig>,
    #[serde(default)]
    third_party_modules: Vec<RawThirdPartyModuleConfig>,
    mode: Option<String>,
    controlling_macro: Option<String>,
    #[serde(default, deserialize_with = "flexible_bool")]
    remain_headers: Option<bool>,
    #[serde(default, deserialize_with = "flexible_bool")]
    keep_traditional_abi: Option<bool>,
    #[serde(default, deserialize_with = "flexible_bool")]
    is_std_module_available: Option<bool>,
    std_module_path: Option<String>,
    compilation_database: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    srcs_to_rewrite: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    srcs_excluded_to_rewrite: Vec<String>,
    default_compile_commands: Option<String>,
    #[serde(flatten)]
    unknown: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
struct RawModuleConfig {
    name: Option<String>,
    path: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    headers: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    excluded_headers: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    srcs: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    excluded_srcs: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    prefix_map_of_module_units_for_headers: Vec<String>,
    #[serde(flatten)]
    unknown: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
struct RawThirdPartyModuleConfig {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "one_or_many")]
    headers: Vec<String>,
    #[serde(flatten)]
    unknown: BTreeMap<String, serde_yaml::Value>,
}

/// Accept either a single string or a list of strings.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(OneOrMany::One(s)) => Ok(vec![s]),
        Some(OneOrMany::Many(v)) => Ok(v),
    }
}

/// Accept YAML booleans as well as `true`/`false`/`1`/`0` in any case.
fn flexible_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    match &value {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::Bool(b) => Ok(Some(*b)),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(1) => Ok(Some(true)),
            Some(0) => Ok(Some(false)),
            _ => Err(de::Error::custom(format!("invalid boolean value {}", n))),
        },
        serde_yaml::Value::String(s) => parse_bool(s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid boolean value '{}'", s))),
        _ => Err(de::Error::custom("expected a boolean")),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn warn_unknown_fields(scope: &str, unknown: &BTreeMap<String, serde_yaml::Value>) {
    for key in unknown.keys() {
        warn!("Unknown field for {}: {}", scope, key);
    }
}

impl ConverterConfig {
    /// Load and validate the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content, path)
    }

    /// Parse `content` as if it was read from `config_path`
    pub fn from_yaml_str(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(content)?;
        warn_unknown_fields("config", &raw.unknown);

        let mut modules = Vec::with_capacity(raw.modules.len());
        for module in raw.modules {
            warn_unknown_fields("modules", &module.unknown);
            modules.push(ModuleConfig {
                name: module
                    .name
                    .filter(|n| !n.is_empty())
                    .ok_or(ConfigError::MissingModuleField { field: "name" })?,
                path: module
                    .path
                    .filter(|p| !p.is_empty())
                    .ok_or(ConfigError::MissingModuleField { field: "path" })?,
                headers: module.headers,
                excluded_headers: module.excluded_headers,
                srcs: module.srcs,
                excluded_srcs: module.excluded_srcs,
                prefix_map: parse_prefix_map(&module.prefix_map_of_module_units_for_headers),
            });
        }

        let third_party_modules = raw
            .third_party_modules
            .into_iter()
            .map(|module| {
                warn_unknown_fields("third_party_modules", &module.unknown);
                ThirdPartyModuleConfig {
                    name: module.name,
                    headers: module.headers,
                }
            })
            .collect();

        let controlling_macro = raw
            .controlling_macro
            .filter(|m| !m.is_empty())
            .ok_or(ConfigError::MissingField("controlling_macro"))?;
        let mode = raw
            .mode
            .ok_or(ConfigError::MissingField("mode"))?
            .parse::<ConvertingMode>()?;
        let is_std_module_available = raw
            .is_std_module_available
            .ok_or(ConfigError::MissingField("is_std_module_available"))?;

        let root_dir = resolve_root_dir(raw.root_dir.as_deref(), config_path);

        let std_module_path = match raw.std_module_path.filter(|p| !p.is_empty()) {
            Some(p) => {
                if is_std_module_available {
                    warn!(
                        "'std_module_path' is only meaningful with 'is_std_module_available' \
                         equals to false."
                    );
                }
                Some(absolutize(&root_dir, Path::new(&p)))
            }
            None if !is_std_module_available => Some(root_dir.join("std.cppm")),
            None => None,
        };

        let compilation_database = raw
            .compilation_database
            .filter(|p| !p.is_empty())
            .map(|p| absolutize(&root_dir, Path::new(&p)));

        let config = Self {
            root_dir,
            modules,
            third_party_modules,
            mode,
            controlling_macro,
            remain_headers: raw.remain_headers.unwrap_or(true),
            keep_traditional_abi: raw.keep_traditional_abi.unwrap_or(true),
            is_std_module_available,
            std_module_path,
            compilation_database,
            srcs_to_rewrite: raw.srcs_to_rewrite,
            srcs_excluded_to_rewrite: raw.srcs_excluded_to_rewrite,
            default_command_line: raw
                .default_compile_commands
                .as_deref()
                .map(split_command_line)
                .unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints. Problems that only make some option
    /// meaningless are logged and tolerated.
    fn validate(&self) -> Result<(), ConfigError> {
        for module in &self.modules {
            if !module.srcs.is_empty() {
                if self.is_header_wrapper() {
                    warn!(
                        "Srcs of module {} are not meaningful in header-wrapper mode",
                        module.name
                    );
                }
                if !self.keep_traditional_abi {
                    warn!(
                        "It may be not good to introduce module implementation units \
                         without keeping the traditional ABI."
                    );
                }
            }

            if !module.prefix_map.is_empty() && self.is_header_wrapper() {
                warn!(
                    "field 'prefix_map_of_module_units_for_headers' in module {} is not \
                     meaningful in header-wrapper mode",
                    module.name
                );
            }

            if Path::new(&module.path).is_absolute() {
                return Err(ConfigError::AbsoluteModulePath(module.path.clone()));
            }
        }

        if !self.keep_traditional_abi && self.is_header_wrapper() {
            warn!("'keep_traditional_abi' is not meaningful in header-wrapper mode.");
        }

        Ok(())
    }

    pub fn is_header_wrapper(&self) -> bool {
        self.mode == ConvertingMode::HeaderWrapper
    }

    pub fn is_rewrite_headers_to_modules(&self) -> bool {
        self.mode == ConvertingMode::RewriteHeadersToModules
    }

    pub fn is_rewrite_headers_to_partitions(&self) -> bool {
        self.mode == ConvertingMode::RewriteHeadersToPartitions
    }

    /// Find a module config by name
    pub fn module(&self, name: &str) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Apply the prefix map of `module_name` to a root-relative header path.
    ///
    /// The first entry whose old prefix matches wins. Paths without a
    /// matching prefix are returned unchanged.
    pub fn mapped_path_for_module_units_of_headers(
        &self,
        module_name: &str,
        relative_path: &str,
    ) -> String {
        let Some(module) = self.module(module_name) else {
            return relative_path.to_string();
        };

        for (old, new) in &module.prefix_map {
            if let Some(rest) = relative_path.strip_prefix(old.as_str()) {
                return format!("{}{}", new, rest);
            }
        }

        relative_path.to_string()
    }
}

fn parse_prefix_map(entries: &[String]) -> Vec<(String, String)> {
    entries
        .iter()
        .filter_map(|entry| match entry.split_once(':') {
            Some((old, new)) => Some((old.to_string(), new.to_string())),
            None => {
                warn!(
                    "The field of 'prefix_map_of_module_units_for_headers' must contain a ':' \
                     to split the key and value field: {}",
                    entry
                );
                None
            }
        })
        .collect()
}

fn resolve_root_dir(root_dir: Option<&str>, config_path: &Path) -> PathBuf {
    let config_path = absolutize(&current_dir(), config_path);
    let config_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(current_dir);

    let root = match root_dir.filter(|r| !r.is_empty()) {
        Some(root) => absolutize(&config_dir, Path::new(root)),
        None => {
            info!(
                "'root_dir' not specified, use the directory of the config file as root dir: {}",
                config_dir.display()
            );
            config_dir
        }
    };

    fs::canonicalize(&root).unwrap_or(root)
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(yaml: &str) -> Result<ConverterConfig, ConfigError> {
        ConverterConfig::from_yaml_str(yaml, Path::new("/project/config.yml"))
    }

    const MINIMAL: &str = "
controlling_macro: USE_MODULES
mode: header-wrapper
is_std_module_available: false
";

    #[test]
    fn test_minimal_config_defaults() {
        let config = parse(MINIMAL).unwrap();
        assert_eq!(config.mode, ConvertingMode::HeaderWrapper);
        assert_eq!(config.root_dir, PathBuf::from("/project"));
        assert!(config.remain_headers);
        assert!(config.keep_traditional_abi);
        assert_eq!(config.std_module_path, Some(PathBuf::from("/project/std.cppm")));
        assert!(config.compilation_database.is_none());
    }

    #[test]
    fn test_required_fields() {
        let err = parse("mode: header-wrapper\nis_std_module_available: true\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("controlling_macro")));

        let err = parse("controlling_macro: M\nis_std_module_available: true\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("mode")));

        let err = parse("controlling_macro: M\nmode: header-wrapper\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("is_std_module_available")));
    }

    #[test]
    fn test_invalid_mode() {
        let err = parse("controlling_macro: M\nmode: wrap\nis_std_module_available: 1\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMode(ref m) if m == "wrap"));
    }

    #[test]
    fn test_flexible_bool_and_patterns() {
        let config = parse(
            "
controlling_macro: M
mode: rewrite-headers-to-partitions
is_std_module_available: 'TRUE'
remain_headers: 0
keep_traditional_abi: false
srcs_to_rewrite: '*.cpp'
srcs_excluded_to_rewrite:
  - a.cpp
  - b.cpp
default_compile_commands: -I/inc -DX=1
",
        )
        .unwrap();
        assert!(config.is_std_module_available);
        assert!(!config.remain_headers);
        assert!(!config.keep_traditional_abi);
        assert_eq!(config.std_module_path, None);
        assert_eq!(config.srcs_to_rewrite, vec!["*.cpp"]);
        assert_eq!(config.srcs_excluded_to_rewrite, vec!["a.cpp", "b.cpp"]);
        assert_eq!(config.default_command_line, vec!["-I/inc", "-DX=1"]);
    }

    #[test]
    fn test_invalid_bool() {
        let err = parse("controlling_macro: M\nmode: header-wrapper\nis_std_module_available: maybe\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_modules_and_prefix_map() {
        let config = parse(
            "
controlling_macro: M
mode: rewrite-headers-to-module-units
is_std_module_available: false
modules:
  - name: a
    path: a.cppm
    headers: include/a.h
    prefix_map_of_module_units_for_headers:
      - include:module
      - broken
third_party_modules:
  - name: third_party
    headers: third_party/.*.h
",
        )
        .unwrap();
        let module = config.module("a").unwrap();
        assert_eq!(module.headers, vec!["include/a.h"]);
        assert_eq!(module.prefix_map, vec![("include".to_string(), "module".to_string())]);
        assert_eq!(
            config.mapped_path_for_module_units_of_headers("a", "include/x/a.h"),
            "module/x/a.h"
        );
        assert_eq!(
            config.mapped_path_for_module_units_of_headers("a", "src/a.h"),
            "src/a.h"
        );
        assert_eq!(config.third_party_modules[0].headers, vec!["third_party/.*.h"]);
    }

    #[test]
    fn test_module_requires_name_and_relative_path() {
        let err = parse(&format!("{}modules:\n  - path: a.cppm\n", MINIMAL)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingModuleField { field: "name" }));

        let err = parse(&format!("{}modules:\n  - name: a\n    path: /abs/a.cppm\n", MINIMAL))
            .unwrap_err();
        assert!(matches!(err, ConfigError::AbsoluteModulePath(_)));
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let config = parse(&format!("{}colour: blue\n", MINIMAL));
        assert!(config.is_ok());
    }

    #[test]
    fn test_load_resolves_paths_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            format!("{}compilation_database: build/cdb.json\nstd_module_path: m/std.cppm\n", MINIMAL),
        )
        .unwrap();

        let config = ConverterConfig::load(&path).unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        assert_eq!(config.root_dir, root);
        assert_eq!(config.compilation_database, Some(root.join("build/cdb.json")));
        assert_eq!(config.std_module_path, Some(root.join("m/std.cppm")));
    }

    #[test]
    fn test_missing_config_file() {
        let err = ConverterConfig::load(Path::new("/definitely/not/here.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
