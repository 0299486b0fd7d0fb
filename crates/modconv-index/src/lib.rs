//! modconv Index
//!
//! Knows which files take part in a conversion and how they relate.
//!
//! ## Modules
//!
//! - `patterns` - Wildcard path patterns and file discovery
//! - `registry` - The interesting file registry
//! - `processing` - Preprocessing passes filling the registry
//! - `graph` - Include links and ordering between registered files

pub mod graph;
pub mod patterns;
pub mod processing;
pub mod registry;

pub use graph::{topological_sort, NonModuleHeaders};
pub use patterns::{find_matched_files, relative_slash_path, PathMatcher, WildcardPattern};
pub use processing::{default_command, AnalysisSummary};
pub use registry::{FileId, FileRecord, InterestingFileManager};
