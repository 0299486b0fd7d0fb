//! Header File Resolver
//!
//! Resolves `#include` spellings to files using the search directories of
//! a compiler invocation.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::invocation::CompilerInvocation;

/// Header file resolver for one translation unit
#[derive(Debug, Clone, Default)]
pub struct HeaderResolver {
    /// `-iquote` directories, searched for quoted includes only
    quote_paths: Vec<PathBuf>,
    /// `-I`, `-isystem` and `-idirafter` directories, in search order
    include_paths: Vec<PathBuf>,
}

/// Where a header was found, needed to continue with `#include_next`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundIn {
    /// Next to the including file
    Includer,
    /// In the `index`th entry of the combined search list
    SearchPath(usize),
    /// Given as an absolute path
    Absolute,
}

impl HeaderResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver for the search directories of `invocation`
    pub fn for_invocation(invocation: &CompilerInvocation) -> Self {
        let mut resolver = Self::new();
        for dir in &invocation.quote_dirs {
            resolver.add_quote_path(dir.clone());
        }
        for dir in invocation
            .include_dirs
            .iter()
            .chain(&invocation.system_dirs)
            .chain(&invocation.after_dirs)
        {
            resolver.add_include_path(dir.clone());
        }
        resolver
    }

    /// Add a quoted-only include path
    pub fn add_quote_path(&mut self, path: PathBuf) {
        if !self.quote_paths.contains(&path) {
            self.quote_paths.push(path);
        }
    }

    /// Add an include path
    pub fn add_include_path(&mut self, path: PathBuf) {
        if !self.include_paths.contains(&path) {
            self.include_paths.push(path);
        }
    }

    /// Get all include paths
    pub fn include_paths(&self) -> &[PathBuf] {
        &self.include_paths
    }

    /// Resolve a header file path
    ///
    /// Given an include directive like `#include <vector>` or
    /// `#include "a.h"`, find the actual file path. Quoted includes are first
    /// looked up next to `from_file`, then in the quote paths.
    pub fn resolve(&self, header: &str, angled: bool, from_file: Option<&Path>) -> Option<PathBuf> {
        self.resolve_from(header, angled, from_file, None)
            .map(|(path, _)| path)
    }

    /// Resolve for `#include_next`: the search continues after `previous`
    pub fn resolve_next(&self, header: &str, previous: FoundIn) -> Option<(PathBuf, FoundIn)> {
        let start = match previous {
            FoundIn::SearchPath(index) => Some(index + 1),
            _ => None,
        };
        self.resolve_from(header, true, None, start)
    }

    /// Resolve and report where the header was found
    pub fn resolve_from(
        &self,
        header: &str,
        angled: bool,
        from_file: Option<&Path>,
        start: Option<usize>,
    ) -> Option<(PathBuf, FoundIn)> {
        let path = Path::new(header);
        if path.is_absolute() {
            return path.is_file().then(|| (canonical(path), FoundIn::Absolute));
        }

        if start.is_none() && !angled {
            // For quoted includes, first try relative to the including file
            if let Some(parent) = from_file.and_then(Path::parent) {
                let relative_path = parent.join(header);
                if relative_path.is_file() {
                    debug!("Resolved {} relative to {:?}", header, parent);
                    return Some((canonical(&relative_path), FoundIn::Includer));
                }
            }
        }

        let quote_len = if angled { 0 } else { self.quote_paths.len() };
        let search = self.quote_paths[..quote_len]
            .iter()
            .chain(&self.include_paths)
            .enumerate()
            .skip(start.unwrap_or(0));

        for (index, include_path) in search {
            let full_path = include_path.join(header);
            if full_path.is_file() {
                debug!("Resolved {} in {:?}", header, include_path);
                return Some((canonical(&full_path), FoundIn::SearchPath(index)));
            }
        }

        debug!("Failed to resolve header: {}", header);
        None
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("include/lib")).unwrap();
        fs::create_dir_all(root.join("sys/lib")).unwrap();
        fs::create_dir_all(root.join("quote")).unwrap();

        fs::write(root.join("src/local.h"), "").unwrap();
        fs::write(root.join("include/lib/a.h"), "").unwrap();
        fs::write(root.join("sys/lib/a.h"), "").unwrap();
        fs::write(root.join("quote/q.h"), "").unwrap();

        temp
    }

    fn resolver(root: &Path) -> HeaderResolver {
        let mut r = HeaderResolver::new();
        r.add_quote_path(root.join("quote"));
        r.add_include_path(root.join("include"));
        r.add_include_path(root.join("sys"));
        r
    }

    #[test]
    fn test_quoted_relative_to_includer() {
        let temp = create_test_tree();
        let r = resolver(temp.path());
        let from = temp.path().join("src/main.cc");

        let found = r.resolve("local.h", false, Some(&from)).unwrap();
        assert!(found.ends_with("src/local.h"));
        assert!(r.resolve("local.h", true, Some(&from)).is_none());
    }

    #[test]
    fn test_quote_paths_only_for_quoted() {
        let temp = create_test_tree();
        let r = resolver(temp.path());

        assert!(r.resolve("q.h", false, None).is_some());
        assert!(r.resolve("q.h", true, None).is_none());
    }

    #[test]
    fn test_include_next() {
        let temp = create_test_tree();
        let r = resolver(temp.path());

        let (first, found) = r.resolve_from("lib/a.h", true, None, None).unwrap();
        assert!(first.ends_with("include/lib/a.h"));

        let (next, _) = r.resolve_next("lib/a.h", found).unwrap();
        assert!(next.ends_with("sys/lib/a.h"));
    }

    #[test]
    fn test_for_invocation_order() {
        let inv = CompilerInvocation {
            quote_dirs: vec![PathBuf::from("/q")],
            include_dirs: vec![PathBuf::from("/i")],
            system_dirs: vec![PathBuf::from("/s")],
            after_dirs: vec![PathBuf::from("/a")],
            ..Default::default()
        };
        let r = HeaderResolver::for_invocation(&inv);
        assert_eq!(
            r.include_paths(),
            &[PathBuf::from("/i"), PathBuf::from("/s"), PathBuf::from("/a")]
        );
    }
}
