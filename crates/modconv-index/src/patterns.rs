//! Path patterns
//!
//! Patterns are matched segment by segment against paths relative to the
//! root directory. In a segment `*` matches any run of characters; a whole
//! segment `**` matches any number of segments, including none.

use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
enum Segment {
    AnyDepth,
    Part(Regex),
    /// A segment that failed to compile, never matches
    Invalid,
}

impl Segment {
    fn parse(segment: &str) -> Self {
        if segment == "**" {
            return Segment::AnyDepth;
        }

        let mut re = String::from("^");
        for (i, piece) in segment.split('*').enumerate() {
            if i > 0 {
                re.push_str(".*");
            }
            re.push_str(&regex::escape(piece));
        }
        re.push('$');

        match Regex::new(&re) {
            Ok(r) => Segment::Part(r),
            Err(e) => {
                warn!("Invalid path pattern segment '{}': {}", segment, e);
                Segment::Invalid
            }
        }
    }

    fn matches(&self, part: &str) -> bool {
        match self {
            Segment::AnyDepth => true,
            Segment::Part(r) => r.is_match(part),
            Segment::Invalid => false,
        }
    }
}

/// A compiled wildcard path pattern
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    segments: Vec<Segment>,
}

impl WildcardPattern {
    pub fn new(pattern: &str) -> Self {
        Self {
            source: pattern.to_string(),
            segments: pattern.split('/').map(Segment::parse).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match a `/` separated relative path
    pub fn is_match(&self, relative_path: &str) -> bool {
        let parts: Vec<&str> = relative_path.split('/').collect();
        match_from(&parts, &self.segments)
    }
}

fn match_from(parts: &[&str], segments: &[Segment]) -> bool {
    match segments.split_first() {
        None => parts.is_empty(),
        Some((Segment::AnyDepth, rest)) => {
            if rest.is_empty() {
                return true;
            }
            // Let `**` swallow 0, 1, 2, ... segments until the rest matches.
            (0..=parts.len()).any(|skip| match_from(&parts[skip..], rest))
        }
        Some((segment, rest)) => match parts.split_first() {
            Some((part, remaining)) => segment.matches(part) && match_from(remaining, rest),
            None => false,
        },
    }
}

/// Include and exclude patterns of one file set
#[derive(Debug, Clone, Default)]
pub struct PathMatcher {
    include: Vec<WildcardPattern>,
    exclude: Vec<WildcardPattern>,
}

impl PathMatcher {
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Self {
        Self {
            include: include.iter().map(|p| WildcardPattern::new(p.as_ref())).collect(),
            exclude: exclude.iter().map(|p| WildcardPattern::new(p.as_ref())).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    /// Exclusion always wins over inclusion
    pub fn is_match(&self, relative_path: &str) -> bool {
        if self.exclude.iter().any(|p| p.is_match(relative_path)) {
            return false;
        }
        self.include.iter().any(|p| p.is_match(relative_path))
    }
}

/// `path` relative to `root`, `/` separated
pub fn relative_slash_path(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Every file below `root` selected by `patterns` and not by `excluded`
pub fn find_matched_files<S: AsRef<str>>(
    root: &Path,
    patterns: &[S],
    excluded: &[S],
) -> BTreeSet<PathBuf> {
    let matcher = PathMatcher::new(patterns, excluded);
    let mut results = BTreeSet::new();
    if matcher.is_empty() {
        return results;
    }

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to walk {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(relative) = relative_slash_path(entry.path(), root) else {
            continue;
        };
        if matcher.is_match(&relative) {
            let path = entry
                .path()
                .canonicalize()
                .unwrap_or_else(|_| entry.path().to_path_buf());
            debug!("Matched {}", path.display());
            results.insert(path);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_segment_star() {
        let p = WildcardPattern::new("*.cpp");
        assert!(p.is_match("a.cpp"));
        assert!(!p.is_match("src/a.cpp"));
        assert!(!p.is_match("a.cppm"));
        // The dot is literal
        assert!(!WildcardPattern::new("a.h").is_match("abh"));
    }

    #[test]
    fn test_double_star() {
        let p = WildcardPattern::new("include/**/*.h");
        assert!(p.is_match("include/a.h"));
        assert!(p.is_match("include/x/y/a.h"));
        assert!(!p.is_match("src/a.h"));

        assert!(WildcardPattern::new("include/**").is_match("include/x/y/z.h"));
        assert!(WildcardPattern::new("**/a.h").is_match("a.h"));
        assert!(WildcardPattern::new("**/a.h").is_match("deep/er/a.h"));
        assert!(!WildcardPattern::new("**/a.h").is_match("deep/b.h"));
    }

    #[test]
    fn test_regex_characters_are_literal() {
        assert!(WildcardPattern::new("a+b.h").is_match("a+b.h"));
        assert!(!WildcardPattern::new("a+b.h").is_match("aab.h"));
    }

    #[test]
    fn test_exclude_wins() {
        let m = PathMatcher::new(&["srcs/*.cc"], &["srcs/skip*.cc"]);
        assert!(m.is_match("srcs/use.cc"));
        assert!(!m.is_match("srcs/skip_me.cc"));
        assert!(!PathMatcher::new::<&str>(&[], &[]).is_match("a.cc"));
    }

    #[test]
    fn test_find_matched_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join("include/impl")).unwrap();
        for f in ["include/a.h", "include/impl/b.h", "include/c.txt", "top.h"] {
            fs::write(root.join(f), "").unwrap();
        }

        let found = find_matched_files(&root, &["include/**/*.h"], &["include/impl/*"]);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![root.join("include/a.h")]);

        let none = find_matched_files::<&str>(&root, &[], &[]);
        assert!(none.is_empty());
    }
}
