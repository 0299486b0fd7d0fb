//! modconv Core
//!
//! Shared data model, configuration and error types for the modules converter.

pub mod cmdline;
pub mod config;
pub mod error;
pub mod location;
pub mod types;

pub use config::{ConverterConfig, ConvertingMode, ModuleConfig, ThirdPartyModuleConfig};
pub use error::{ConfigError, Error, Result};
pub use location::Location;
pub use types::*;
