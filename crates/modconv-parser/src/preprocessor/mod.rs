//! Built-in C++ preprocessor
//!
//! Runs a macro-aware preprocessing pass over a translation unit and reports
//! what it sees through [`PreprocessObserver`] hooks. Only the parts of
//! preprocessing that affect includes, imports and macro tracking are
//! modelled; no output text is produced.

pub mod engine;
pub mod expr;
pub mod headers;
pub mod invocation;
pub mod macros;
pub mod observer;

pub use engine::{Diagnostic, Preprocessor, Severity};
pub use headers::HeaderResolver;
pub use invocation::{CompilerInvocation, PreprocessError};
pub use macros::{MacroDefinition, MacroInfo, MacroOrigin, PpToken};
pub use observer::{InclusionEvent, PreprocessObserver};
