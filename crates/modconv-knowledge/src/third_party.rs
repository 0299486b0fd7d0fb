//! Third party modules
//!
//! Maps the text of an `#include` that is not part of the project to the
//! module that provides it. User declared modules are tried first, in
//! declaration order, then the built-in `std` module covering every
//! standard header.

use crate::std_module::{STD_HEADERS, STD_MODULE_NAME};
use modconv_core::{ConfigError, ThirdPartyModuleConfig};
use regex::Regex;
use tracing::debug;

/// An external module and the header patterns it provides
#[derive(Debug, Clone)]
struct ThirdPartyModule {
    name: String,
    headers: Vec<Regex>,
}

/// Result of a successful lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThirdPartyMatch<'a> {
    /// Module to import
    pub module: &'a str,
    /// The module is the standard library
    pub is_std: bool,
}

/// Ordered include-text to module mapper
#[derive(Debug, Clone)]
pub struct ThirdPartyModules {
    modules: Vec<ThirdPartyModule>,
}

impl ThirdPartyModules {
    /// Compile the user declared modules and append the built-in `std` one
    pub fn new(configs: &[ThirdPartyModuleConfig]) -> Result<Self, ConfigError> {
        let mut modules = Vec::with_capacity(configs.len() + 1);
        for config in configs {
            let headers = config
                .headers
                .iter()
                .map(|pattern| {
                    Regex::new(pattern).map_err(|e| ConfigError::InvalidRegex {
                        module: config.name.clone(),
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            modules.push(ThirdPartyModule {
                name: config.name.clone(),
                headers,
            });
        }
        modules.push(Self::builtin_std());
        Ok(Self { modules })
    }

    /// Only the built-in `std` module
    pub fn builtin() -> Self {
        Self {
            modules: vec![Self::builtin_std()],
        }
    }

    fn builtin_std() -> ThirdPartyModule {
        let headers = STD_HEADERS
            .iter()
            .filter_map(|h| Regex::new(&format!("^{}$", regex::escape(h))).ok())
            .collect();
        ThirdPartyModule {
            name: STD_MODULE_NAME.to_string(),
            headers,
        }
    }

    /// First module with a pattern matching anywhere in `included_text`
    pub fn lookup(&self, included_text: &str) -> Option<ThirdPartyMatch<'_>> {
        let module = self
            .modules
            .iter()
            .find(|m| m.headers.iter().any(|r| r.is_match(included_text)))?;
        debug!("'{}' is provided by module {}", included_text, module.name);
        Some(ThirdPartyMatch {
            module: &module.name,
            is_std: module.name == STD_MODULE_NAME,
        })
    }

    /// Header patterns of every user declared `std` module
    pub fn user_std_patterns(configs: &[ThirdPartyModuleConfig]) -> Vec<&str> {
        configs
            .iter()
            .filter(|c| c.name == STD_MODULE_NAME)
            .flat_map(|c| c.headers.iter().map(String::as_str))
            .collect()
    }
}

impl Default for ThirdPartyModules {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, headers: &[&str]) -> ThirdPartyModuleConfig {
        ThirdPartyModuleConfig {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
        }
    }

    #[test]
    fn test_user_modules_first() {
        let modules = ThirdPartyModules::new(&[
            config("third_party", &["third_party/.*.h"]),
            config("fmt", &["^fmt/"]),
        ])
        .unwrap();

        let m = modules.lookup("third_party/third.h").unwrap();
        assert_eq!(m.module, "third_party");
        assert!(!m.is_std);

        // Unanchored patterns match anywhere in the text.
        assert_eq!(modules.lookup("vendor/third_party/x.h").unwrap().module, "third_party");
        assert_eq!(modules.lookup("fmt/core.h").unwrap().module, "fmt");
        assert!(modules.lookup("myfmt/core.h").is_none());
    }

    #[test]
    fn test_builtin_std() {
        let modules = ThirdPartyModules::new(&[]).unwrap();
        let m = modules.lookup("vector").unwrap();
        assert_eq!(m.module, "std");
        assert!(m.is_std);
        assert!(modules.lookup("vector.h").is_none());
        assert!(modules.lookup("stddef.h").is_none());
    }

    #[test]
    fn test_user_std_header() {
        let configs = [config("std", &["new_std_header"])];
        let modules = ThirdPartyModules::new(&configs).unwrap();
        assert!(modules.lookup("new_std_header").unwrap().is_std);
        assert_eq!(ThirdPartyModules::user_std_patterns(&configs), vec!["new_std_header"]);
    }

    #[test]
    fn test_invalid_regex() {
        let err = ThirdPartyModules::new(&[config("bad", &["a("])]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegex { ref module, .. } if module == "bad"));
    }
}
