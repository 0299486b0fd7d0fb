//! Compiler invocation
//!
//! Turns a compiler command line into the preprocessing options the
//! built-in preprocessor understands. Flags that do not influence
//! preprocessing are skipped.

use super::macros::MacroDefinition;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during preprocessing
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("empty command line")]
    EmptyCommandLine,

    #[error("missing argument for '{0}'")]
    MissingArgument(String),

    #[error("no input file in command line")]
    NoInput,

    #[error("expected exactly one compiler job, found inputs: {}", .0.join(", "))]
    MultipleInputs(Vec<String>),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flags taking their value in the next argument that we do not care about
const SKIPPED_WITH_VALUE: &[&str] = &[
    "-o",
    "-MF",
    "-MT",
    "-MQ",
    "-MJ",
    "-target",
    "-arch",
    "-Xclang",
    "-Xpreprocessor",
    "-Xassembler",
    "-Xlinker",
    "-isysroot",
    "--sysroot",
    "-imultilib",
    "-iprefix",
    "-iwithprefix",
    "-iwithprefixbefore",
    "-include-pch",
    "-resource-dir",
    "-ivfsoverlay",
    "-gcc-toolchain",
    "-main-file-name",
    "-dependency-file",
    "-z",
];

/// Preprocessing options for one translation unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerInvocation {
    /// argv[0]
    pub compiler: String,
    /// Directory relative paths are resolved against
    pub working_dir: PathBuf,
    /// The single input file
    pub input: PathBuf,
    /// Value of `-x`
    pub language: Option<String>,
    /// Value of `-std=`
    pub std: Option<String>,
    /// `-D` and `-U` in command line order
    pub macros: Vec<MacroDefinition>,
    /// `-iquote`
    pub quote_dirs: Vec<PathBuf>,
    /// `-I`
    pub include_dirs: Vec<PathBuf>,
    /// `-isystem`
    pub system_dirs: Vec<PathBuf>,
    /// `-idirafter`
    pub after_dirs: Vec<PathBuf>,
    /// `-imacros` and `-include`, in command line order
    pub forced_includes: Vec<PathBuf>,
    /// `-nostdinc` / `-nostdinc++`
    pub no_std_inc: bool,
}

impl CompilerInvocation {
    /// Build an invocation from `args`; argv[0] must be the compiler.
    pub fn from_command_line(args: &[String], working_dir: &Path) -> Result<Self, PreprocessError> {
        let (compiler, rest) = args.split_first().ok_or(PreprocessError::EmptyCommandLine)?;

        let mut inv = Self {
            compiler: compiler.clone(),
            working_dir: working_dir.to_path_buf(),
            ..Default::default()
        };
        let mut inputs: Vec<String> = Vec::new();
        let mut iter = rest.iter();

        while let Some(arg) = iter.next() {
            let arg = arg.as_str();

            if arg == "--" {
                inputs.extend(iter.by_ref().cloned());
                break;
            }

            if !arg.starts_with('-') || arg == "-" {
                inputs.push(arg.to_string());
                continue;
            }

            if let Some(value) = joined_or_next(arg, "-iquote", &mut iter)? {
                inv.quote_dirs.push(inv.resolve(&value));
            } else if let Some(value) = joined_or_next(arg, "-isystem", &mut iter)? {
                inv.system_dirs.push(inv.resolve(&value));
            } else if let Some(value) = joined_or_next(arg, "-idirafter", &mut iter)? {
                inv.after_dirs.push(inv.resolve(&value));
            } else if let Some(value) = joined_or_next(arg, "-imacros", &mut iter)? {
                inv.forced_includes.push(inv.resolve(&value));
            } else if arg == "-include" || (arg.starts_with("-include") && !arg.starts_with("-include-")) {
                let value = joined_or_next(arg, "-include", &mut iter)?.unwrap_or_default();
                inv.forced_includes.push(inv.resolve(&value));
            } else if let Some(value) = joined_or_next(arg, "-I", &mut iter)? {
                inv.include_dirs.push(inv.resolve(&value));
            } else if let Some(value) = joined_or_next(arg, "-D", &mut iter)? {
                inv.macros.push(MacroDefinition::from_define_arg(&value));
            } else if let Some(value) = joined_or_next(arg, "-U", &mut iter)? {
                inv.macros.push(MacroDefinition::undefined(&value));
            } else if let Some(value) = arg.strip_prefix("-std=").or_else(|| arg.strip_prefix("--std=")) {
                inv.std = Some(value.to_string());
            } else if arg == "-nostdinc" || arg == "-nostdinc++" {
                inv.no_std_inc = true;
            } else if let Some(value) = joined_or_next(arg, "-x", &mut iter)? {
                inv.language = Some(value);
            } else if SKIPPED_WITH_VALUE.contains(&arg) {
                iter.next()
                    .ok_or_else(|| PreprocessError::MissingArgument(arg.to_string()))?;
            }
        }

        match inputs.len() {
            0 => Err(PreprocessError::NoInput),
            1 => {
                inv.input = inv.resolve(&inputs[0]);
                Ok(inv)
            }
            _ => Err(PreprocessError::MultipleInputs(inputs)),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Numeric value of `__cplusplus` for the selected standard
    pub fn cplusplus_version(&self) -> i64 {
        let std = self.std.as_deref().unwrap_or("gnu++17");
        let version = std
            .trim_start_matches("gnu++")
            .trim_start_matches("c++");
        match version {
            "98" | "03" => 199711,
            "11" | "0x" => 201103,
            "14" | "1y" => 201402,
            "17" | "1z" => 201703,
            "20" | "2a" => 202002,
            "23" | "2b" => 202302,
            "26" | "2c" => 202400,
            _ => 201703,
        }
    }

    /// Whether the selected standard has modules
    pub fn has_modules(&self) -> bool {
        self.cplusplus_version() >= 202002
    }
}

/// Match `flag` as `flagVALUE` or `flag VALUE`
fn joined_or_next<'a>(
    arg: &str,
    flag: &str,
    iter: &mut impl Iterator<Item = &'a String>,
) -> Result<Option<String>, PreprocessError> {
    if arg == flag {
        return iter
            .next()
            .cloned()
            .map(Some)
            .ok_or_else(|| PreprocessError::MissingArgument(flag.to_string()));
    }
    Ok(arg.strip_prefix(flag).map(|v| v.trim_start_matches('=').to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_include_dirs_and_macros() {
        let inv = CompilerInvocation::from_command_line(
            &args("clang++ -std=c++20 src/use.cc -Iinclude -I /abs -isystem sys -iquote q -DUSE_B -UX -c -o use.o"),
            Path::new("/work"),
        )
        .unwrap();

        assert_eq!(inv.input, PathBuf::from("/work/src/use.cc"));
        assert_eq!(inv.include_dirs, vec![PathBuf::from("/work/include"), PathBuf::from("/abs")]);
        assert_eq!(inv.system_dirs, vec![PathBuf::from("/work/sys")]);
        assert_eq!(inv.quote_dirs, vec![PathBuf::from("/work/q")]);
        assert_eq!(
            inv.macros,
            vec![MacroDefinition::defined("USE_B"), MacroDefinition::undefined("X")]
        );
        assert!(inv.has_modules());
    }

    #[test]
    fn test_language_and_forced_includes() {
        let inv = CompilerInvocation::from_command_line(
            &args("clang++ -nostdinc++ -E -xc++-header -include pre.h -imacros m.h a.h"),
            Path::new("/w"),
        )
        .unwrap();
        assert_eq!(inv.language.as_deref(), Some("c++-header"));
        assert!(inv.no_std_inc);
        assert_eq!(
            inv.forced_includes,
            vec![PathBuf::from("/w/pre.h"), PathBuf::from("/w/m.h")]
        );
        assert_eq!(inv.cplusplus_version(), 201703);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            CompilerInvocation::from_command_line(&[], Path::new("/")),
            Err(PreprocessError::EmptyCommandLine)
        ));
        assert!(matches!(
            CompilerInvocation::from_command_line(&args("clang++ -c"), Path::new("/")),
            Err(PreprocessError::NoInput)
        ));
        assert!(matches!(
            CompilerInvocation::from_command_line(&args("clang++ a.cc b.cc"), Path::new("/")),
            Err(PreprocessError::MultipleInputs(_))
        ));
        assert!(matches!(
            CompilerInvocation::from_command_line(&args("clang++ a.cc -I"), Path::new("/")),
            Err(PreprocessError::MissingArgument(_))
        ));
        assert!(matches!(
            CompilerInvocation::from_command_line(&args("clang++ a.cc -o"), Path::new("/")),
            Err(PreprocessError::MissingArgument(_))
        ));
    }
}
