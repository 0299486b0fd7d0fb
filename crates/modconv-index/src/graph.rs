//! Include graph
//!
//! Links the preamble includes of processed files to other registered
//! files. Includes that stay outside the registry are kept as written.

use crate::registry::{FileId, InterestingFileManager};
use modconv_core::{CompileCommand, ProcessedInfo};
use modconv_knowledge::ThirdPartyModules;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

/// Non-interesting headers that no module provides, with the command used
/// to compile one of their includers
pub type NonModuleHeaders = BTreeMap<PathBuf, CompileCommand>;

impl InterestingFileManager {
    /// Store the analysis result of `id` and link its includes.
    ///
    /// Unmapped non-interesting includes are collected into `found` so their
    /// own include sets can be computed later.
    pub fn set_processed_info(
        &mut self,
        id: FileId,
        info: ProcessedInfo,
        command: &CompileCommand,
        third_party: &ThirdPartyModules,
        found: &mut NonModuleHeaders,
    ) {
        let succeeded = info.is_success();
        let included = info.directly_included.clone();
        self.set_info(id, info);
        if !succeeded {
            return;
        }

        let mut interesting = Vec::new();
        let mut non_interesting = Vec::new();
        for inc in included {
            match inc.resolved.as_deref().and_then(|p| self.lookup(p)) {
                Some(target) => interesting.push(target),
                None => non_interesting.push(inc),
            }
        }

        for inc in &non_interesting {
            if third_party.lookup(&inc.text).is_some() {
                continue;
            }
            if let Some(resolved) = &inc.resolved {
                found
                    .entry(resolved.clone())
                    .or_insert_with(|| command.clone());
            }
        }

        let record = self.get_mut(id);
        record.interesting_includes = interesting;
        record.non_interesting_includes = non_interesting;
    }
}

/// Order `files` so every file comes after the files it includes.
///
/// Dependencies outside `files` are walked through but not emitted. Cycles
/// are broken at the first revisit.
pub fn topological_sort(manager: &InterestingFileManager, files: &[FileId]) -> Vec<FileId> {
    let wanted: HashSet<FileId> = files.iter().copied().collect();
    let mut visited = HashSet::new();
    let mut sorted = Vec::with_capacity(files.len());

    for &file in files {
        if visited.contains(&file) {
            continue;
        }

        // Iterative post-order walk; the bool marks the second visit.
        let mut stack = vec![(file, false)];
        while let Some((current, expanded)) = stack.pop() {
            if expanded {
                if wanted.contains(&current) {
                    sorted.push(current);
                }
                continue;
            }
            if !visited.insert(current) {
                continue;
            }
            stack.push((current, true));
            for &dep in manager.get(current).interesting_includes().iter().rev() {
                if !visited.contains(&dep) {
                    stack.push((dep, false));
                }
            }
        }
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use modconv_core::{Included, PreambleOffsets};
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn info_including(paths: &[(&str, Option<&str>)]) -> ProcessedInfo {
        ProcessedInfo {
            preamble: PreambleOffsets::new(0, 10),
            directly_included: paths
                .iter()
                .map(|(text, resolved)| Included::new(resolved.map(PathBuf::from), *text, false))
                .collect(),
            succeeded: true,
            ..Default::default()
        }
    }

    fn command() -> CompileCommand {
        CompileCommand::new("/p", vec!["clang++".into(), "/p/x.cc".into()], Path::new("/p/x.cc"))
    }

    #[test]
    fn test_partition_includes() {
        let mut manager = InterestingFileManager::new();
        let a = manager.register("a", Path::new("/p/a.h"), true);
        let b = manager.register("b", Path::new("/p/b.h"), true);
        let third_party = ThirdPartyModules::new(&[modconv_core::ThirdPartyModuleConfig {
            name: "third_party".into(),
            headers: vec!["third_party/.*.h".into()],
        }])
        .unwrap();

        let mut found = NonModuleHeaders::new();
        manager.set_processed_info(
            a,
            info_including(&[
                ("b.h", Some("/p/b.h")),
                ("third_party/t.h", Some("/p/third_party/t.h")),
                ("other.h", Some("/p/other.h")),
                ("vector", None),
                ("missing.h", None),
            ]),
            &command(),
            &third_party,
            &mut found,
        );

        let record = manager.get(a);
        assert_eq!(record.interesting_includes(), &[b]);
        let texts: Vec<&str> = record
            .non_interesting_includes()
            .iter()
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(texts, vec!["third_party/t.h", "other.h", "vector", "missing.h"]);
        // Only unmapped and resolved headers need a second look.
        assert_eq!(found.keys().collect::<Vec<_>>(), vec![Path::new("/p/other.h")]);
    }

    #[test]
    fn test_failed_info_is_not_linked() {
        let mut manager = InterestingFileManager::new();
        let a = manager.register("a", Path::new("/p/a.h"), true);
        let mut found = NonModuleHeaders::new();
        manager.set_processed_info(
            a,
            ProcessedInfo::failed(),
            &command(),
            &ThirdPartyModules::builtin(),
            &mut found,
        );
        assert!(manager.get(a).is_processed());
        assert!(manager.get(a).interesting_includes().is_empty());
    }

    #[test]
    fn test_topological_sort() {
        let mut manager = InterestingFileManager::new();
        let top = manager.register("m", Path::new("/p/top.h"), true);
        let mid = manager.register("m", Path::new("/p/mid.h"), true);
        let outside = manager.register("n", Path::new("/p/outside.h"), true);
        let leaf = manager.register("m", Path::new("/p/leaf.h"), true);

        let mut found = NonModuleHeaders::new();
        let tp = ThirdPartyModules::builtin();
        manager.set_processed_info(top, info_including(&[("mid.h", Some("/p/mid.h"))]), &command(), &tp, &mut found);
        manager.set_processed_info(mid, info_including(&[("outside.h", Some("/p/outside.h"))]), &command(), &tp, &mut found);
        manager.set_processed_info(outside, info_including(&[("leaf.h", Some("/p/leaf.h"))]), &command(), &tp, &mut found);
        manager.set_processed_info(leaf, info_including(&[]), &command(), &tp, &mut found);

        // leaf is reached through a header of another module.
        let sorted = topological_sort(&manager, &[top, mid, leaf]);
        assert_eq!(sorted, vec![leaf, mid, top]);

        let sorted = topological_sort(&manager, &[mid, top]);
        assert_eq!(sorted, vec![mid, top]);
    }

    #[test]
    fn test_topological_sort_cycle() {
        let mut manager = InterestingFileManager::new();
        let a = manager.register("m", Path::new("/p/a.h"), true);
        let b = manager.register("m", Path::new("/p/b.h"), true);
        let mut found = NonModuleHeaders::new();
        let tp = ThirdPartyModules::builtin();
        manager.set_processed_info(a, info_including(&[("b.h", Some("/p/b.h"))]), &command(), &tp, &mut found);
        manager.set_processed_info(b, info_including(&[("a.h", Some("/p/a.h"))]), &command(), &tp, &mut found);

        assert_eq!(topological_sort(&manager, &[a, b]), vec![b, a]);
    }
}
