//! Workaround `std` module
//!
//! When the toolchain ships no `std` module, the converter writes one that
//! includes the standard headers the project actually uses and re-exports
//! their names.

use crate::std_tables::std_header_body;

/// Name of the standard library module
pub const STD_MODULE_NAME: &str = "std";

/// Standard library headers, sorted
pub const STD_HEADERS: &[&str] = &[
    "algorithm", "any", "array", "atomic", "barrier", "bit", "bitset", "cctype", "cerrno",
    "cfenv", "cfloat", "charconv", "chrono", "cinttypes", "clocale", "cmath", "codecvt",
    "compare", "complex", "concepts", "condition_variable", "coroutine", "csetjmp", "csignal",
    "cstdarg", "cstddef", "cstdint", "cstdio", "cstdlib", "cstring", "ctime", "cuchar",
    "cwchar", "cwctype", "deque", "exception", "execution", "expected", "filesystem", "format",
    "forward_list", "fstream", "functional", "future", "initializer_list", "iomanip", "ios",
    "iosfwd", "iostream", "istream", "iterator", "latch", "limits", "list", "locale", "map",
    "mdspan", "memory", "memory_resource", "mutex", "new", "numbers", "numeric", "optional",
    "ostream", "print", "queue", "random", "ranges", "ratio", "regex", "scoped_allocator",
    "semaphore", "set", "shared_mutex", "source_location", "span", "sstream", "stack",
    "stdexcept", "stop_token", "streambuf", "string", "string_view", "strstream", "syncstream",
    "system_error", "thread", "tuple", "type_traits", "typeindex", "typeinfo", "unordered_map",
    "unordered_set", "utility", "valarray", "variant", "vector",
];

const PREFACE: &str = "// This is a workaround implementation for std module
// to ease the use of modules. Please replace this with the official std module
// when that is available.
";

const MODULE_DECLARATION: &str = r#"#if defined(__clang__)
#pragma clang diagnostic push
#pragma clang diagnostic ignored "-Wreserved-module-identifier"
#endif

export module std;

#if defined(__clang__)
#pragma clang diagnostic pop
#endif
"#;

// Iterators of libstdc++ need their operators reachable.
const GLIBCXX_WORKAROUND: &str = r#"#if defined(__GLIBCXX__) || defined(__GLIBCPP__)
export namespace __gnu_cxx {
    using __gnu_cxx::operator==;
    using __gnu_cxx::operator-;
}
#endif
"#;

pub fn is_std_header(name: &str) -> bool {
    STD_HEADERS.binary_search(&name).is_ok()
}

/// Strip the `^`/`$` anchors of a header pattern
fn header_name_of_pattern(pattern: &str) -> &str {
    let name = pattern.strip_prefix('^').unwrap_or(pattern);
    name.strip_suffix('$').unwrap_or(name)
}

/// Collects used standard headers and renders the `std` module
#[derive(Debug, Clone, Default)]
pub struct StdModuleGenerator {
    /// Headers declared by the user under a third party module named `std`
    user_headers: Vec<String>,
    used: Vec<String>,
}

impl StdModuleGenerator {
    /// `user_patterns` are the header patterns of user declared `std` modules
    pub fn new<S: AsRef<str>>(user_patterns: &[S]) -> Self {
        let mut user_headers: Vec<String> = Vec::new();
        for pattern in user_patterns {
            let name = header_name_of_pattern(pattern.as_ref());
            if !is_std_header(name) && !user_headers.iter().any(|h| h == name) {
                user_headers.push(name.to_string());
            }
        }
        Self {
            user_headers,
            used: Vec::new(),
        }
    }

    /// Record that `header` was mapped to the `std` module
    pub fn mark_used(&mut self, header: &str) {
        if !self.used.iter().any(|h| h == header) {
            self.used.push(header.to_string());
        }
    }

    pub fn is_used(&self) -> bool {
        !self.used.is_empty()
    }

    /// Used headers to include: standard ones in list order, then user
    /// declared ones in declaration order
    pub fn included_headers(&self) -> Vec<&str> {
        STD_HEADERS
            .iter()
            .copied()
            .chain(self.user_headers.iter().map(String::as_str))
            .filter(|h| self.used.iter().any(|u| u == h))
            .collect()
    }

    /// Text of the `std` module interface
    pub fn render(&self) -> String {
        let headers = self.included_headers();
        let mut out = String::from(PREFACE);
        out.push_str("module;\n");
        for header in &headers {
            out.push_str(&format!("#include <{}>\n", header));
        }
        out.push_str(MODULE_DECLARATION);
        for header in &headers {
            if let Some(body) = std_header_body(header) {
                out.push_str(body);
                out.push('\n');
            }
        }
        out.push_str(GLIBCXX_WORKAROUND);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_std_headers_sorted() {
        assert!(STD_HEADERS.windows(2).all(|w| w[0] < w[1]));
        assert!(is_std_header("vector"));
        assert!(is_std_header("string_view"));
        assert!(!is_std_header("vector.h"));
    }

    #[test]
    fn test_included_headers_order() {
        let mut gen = StdModuleGenerator::new(&["new_std_header", "^vector$"]);
        assert!(!gen.is_used());
        gen.mark_used("new_std_header");
        gen.mark_used("vector");
        gen.mark_used("array");
        gen.mark_used("vector");
        assert_eq!(gen.included_headers(), vec!["array", "vector", "new_std_header"]);
    }

    #[test]
    fn test_render() {
        let mut gen = StdModuleGenerator::new::<&str>(&[]);
        gen.mark_used("vector");
        let text = gen.render();

        assert!(text.starts_with("// This is a workaround implementation for std module\n"));
        assert!(text.contains("module;\n#include <vector>\n#if defined(__clang__)\n"));
        assert!(text.contains("\nexport module std;\n"));
        assert!(text.contains("export namespace std {\n  using std::vector;\n"));
        assert!(!text.contains("#include <set>"));
        assert!(text.ends_with(GLIBCXX_WORKAROUND));

        let declaration = text.find("export module std;").unwrap();
        let body = text.find("using std::vector;").unwrap();
        assert!(declaration < body);
    }
}
