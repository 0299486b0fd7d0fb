//! modconv Rewrite
//!
//! Turns an analysed set of interesting files into C++20 modules:
//!
//! - `buffer` - Offset based text patches
//! - `naming` - Module names of converted headers
//! - `paths` - Locations of generated units
//! - `sections` - Import lists and diagnostics shared by generated text
//! - `emitter` - The rewriting jobs

pub mod buffer;
pub mod emitter;
pub mod naming;
pub mod paths;
mod sections;

pub use buffer::{LineEnding, RewriteBuffer};
pub use emitter::{RewriteReport, RewriterManager};
pub use naming::ModuleNamer;

use modconv_core::ConverterConfig;
use modconv_index::InterestingFileManager;
use modconv_knowledge::ThirdPartyModules;
use std::path::PathBuf;
use tracing::info;

/// Summary of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Interesting files analysed successfully
    pub analysed: usize,
    /// Interesting files whose analysis failed
    pub failed: usize,
    pub rewritten: Vec<PathBuf>,
    pub generated: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

/// Convert the project described by `config`.
///
/// Only configuration problems are errors. Files that fail to analyse or
/// rewrite are logged and skipped.
pub fn convert(config: &ConverterConfig) -> modconv_core::Result<ConversionReport> {
    let third_party = ThirdPartyModules::new(&config.third_party_modules)?;

    let mut manager = InterestingFileManager::calculate_interesting_files(config);
    let summary = manager.process_interesting_files(config, &third_party);

    let rewritten = RewriterManager::new(config, &manager, &third_party).rewrite_interesting_files();
    let report = ConversionReport {
        analysed: summary.analysed,
        failed: summary.failed,
        rewritten: rewritten.rewritten,
        generated: rewritten.generated,
        removed: rewritten.removed,
    };

    info!(
        "Converted {} files: {} rewritten, {} generated, {} removed, {} failed",
        report.analysed,
        report.rewritten.len(),
        report.generated.len(),
        report.removed.len(),
        report.failed
    );
    Ok(report)
}
