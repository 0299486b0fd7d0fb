//! Compilation database reader
//!
//! Reads `compile_commands.json`. Entries may carry either a `command`
//! string or an `arguments` array. Files that strict JSON rejects, such as
//! ones with trailing commas, are retried as YAML flow syntax.

use modconv_core::cmdline::split_command_line;
use modconv_core::CompileCommand;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CompileDbError {
    #[error("failed to read compilation database {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse compilation database {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("entry {index} of {path} has neither 'command' nor 'arguments'")]
    MissingCommand { path: PathBuf, index: usize },
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    directory: String,
    file: String,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    arguments: Option<Vec<String>>,
}

/// All compile commands of a compilation database
#[derive(Debug, Clone, Default)]
pub struct CompilationDatabase {
    commands: Vec<CompileCommand>,
}

impl CompilationDatabase {
    /// Load a compilation database file
    pub fn load(path: &Path) -> Result<Self, CompileDbError> {
        let content = std::fs::read_to_string(path).map_err(|source| CompileDbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse database `content`; relative directories are resolved against
    /// the directory containing `path`
    pub fn parse(content: &str, path: &Path) -> Result<Self, CompileDbError> {
        let entries: Vec<RawEntry> = match serde_json::from_str(content) {
            Ok(entries) => entries,
            Err(json_err) => {
                debug!("{} is not strict JSON ({}), trying YAML", path.display(), json_err);
                serde_yaml::from_str(content).map_err(|e| CompileDbError::Parse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
            }
        };

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let mut commands = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let command_line = match (entry.arguments, entry.command) {
                (Some(arguments), _) => arguments,
                (None, Some(command)) => split_command_line(&command),
                (None, None) => {
                    return Err(CompileDbError::MissingCommand {
                        path: path.to_path_buf(),
                        index,
                    })
                }
            };
            let directory = base.join(&entry.directory);
            let filename = directory.join(&entry.file);
            commands.push(CompileCommand::new(directory, command_line, &filename));
        }

        debug!("Loaded {} compile commands from {}", commands.len(), path.display());
        Ok(Self { commands })
    }

    pub fn all_commands(&self) -> &[CompileCommand] {
        &self.commands
    }

    /// Commands compiling `file`
    pub fn commands_for<'a>(&'a self, file: &'a Path) -> impl Iterator<Item = &'a CompileCommand> + 'a {
        self.commands.iter().filter(move |c| c.filename == file)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_command_and_arguments() {
        let content = r#"[
  {"directory": "/work", "command": "clang++ -std=c++20 -DNAME=\"x y\" src/a.cc -c", "file": "src/a.cc"},
  {"directory": "/work", "arguments": ["clang++", "-Iinc", "b.cc"], "file": "/work/b.cc"}
]"#;
        let db = CompilationDatabase::parse(content, Path::new("/work/compile_commands.json")).unwrap();
        assert_eq!(db.len(), 2);

        let a = &db.all_commands()[0];
        assert_eq!(a.filename, PathBuf::from("/work/src/a.cc"));
        assert_eq!(
            a.command_line,
            vec!["clang++", "-std=c++20", "-DNAME=x y", "src/a.cc", "-c"]
        );

        let b = &db.all_commands()[1];
        assert_eq!(b.command_line, vec!["clang++", "-Iinc", "b.cc"]);
        assert_eq!(db.commands_for(Path::new("/work/b.cc")).count(), 1);
    }

    #[test]
    fn test_trailing_comma_is_accepted() {
        let content = r#"[
{
  "directory": "/w",
  "command": "clang++ -std=c++20 /w/srcs/use.cc -I/w/include -DUSE_B -c -o use.o",
  "file": "/w/srcs/use.cc",
}
]"#;
        let db = CompilationDatabase::parse(content, Path::new("/w/cdb.json")).unwrap();
        assert_eq!(db.all_commands()[0].filename, PathBuf::from("/w/srcs/use.cc"));
        assert_eq!(db.all_commands()[0].command_line.len(), 8);
    }

    #[test]
    fn test_relative_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cdb.json");
        fs::write(
            &path,
            r#"[{"directory": "build", "arguments": ["cc", "../a.c"], "file": "../a.c"}]"#,
        )
        .unwrap();
        let db = CompilationDatabase::load(&path).unwrap();
        let cmd = &db.all_commands()[0];
        assert_eq!(cmd.directory, dir.path().join("build"));
        assert_eq!(cmd.filename, dir.path().join("build").join("../a.c"));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            CompilationDatabase::load(Path::new("/nonexistent/cdb.json")),
            Err(CompileDbError::Io { .. })
        ));
        assert!(matches!(
            CompilationDatabase::parse(r#"[{"directory": "/", "file": "a.cc"}]"#, Path::new("c.json")),
            Err(CompileDbError::MissingCommand { index: 0, .. })
        ));
        assert!(matches!(
            CompilationDatabase::parse("{not a list", Path::new("c.json")),
            Err(CompileDbError::Parse { .. })
        ));
    }
}
