//! modconv Parser
//!
//! Everything that looks at C++ text.
//!
//! ## Modules
//!
//! - `lexer` - Raw tokenizer, no macro expansion
//! - `preamble` - Locates the preprocessor preamble and include guards
//! - `preprocessor` - Built-in preprocessor driven by a compiler command line
//! - `dependency` - Collects includes, imports and macro uses of one file
//! - `compile_db` - Compilation database reader

pub mod compile_db;
pub mod dependency;
pub mod lexer;
pub mod preamble;
pub mod preprocessor;

pub use compile_db::{CompilationDatabase, CompileDbError};
pub use dependency::{DependencyExtractor, Preprocessed};
pub use lexer::{decode_source, RawLexer, Token, TokenKind, TokenSource};
pub use preamble::{analyze_preamble, scan_preamble, PreambleScan};
pub use preprocessor::{CompilerInvocation, PreprocessError, PreprocessObserver, Preprocessor};
