//! Preamble Analyzer
//!
//! Finds the preprocessor preamble of a file with a raw re-lex: the run of
//! `#include`s, conditionals and other directives at the top of a file,
//! before the first declaration. Also detects a classic include guard
//! (`#ifndef X` / `#define X` ... `#endif`) wrapping the whole file.
//!
//! No macro is expanded here: search paths are not settled when this runs.

use crate::lexer::{RawLexer, Token, TokenKind, TokenSource};
use modconv_core::{ControllingMacroOffsets, PreambleOffsets};

/// Directives allowed inside a preamble
const PREAMBLE_DIRECTIVES: &[&str] = &[
    "include",
    "__include_macros",
    "define",
    "undef",
    "line",
    "error",
    "pragma",
    "import",
    "include_next",
    "warning",
    "ident",
    "sccs",
    "assert",
    "unassert",
    "if",
    "ifdef",
    "ifndef",
    "elif",
    "elifdef",
    "elifndef",
    "else",
    "endif",
];

const INCLUDE_DIRECTIVES: &[&str] = &["include", "include_next", "import", "__include_macros"];

fn is_if_directive(keyword: &str) -> bool {
    matches!(keyword, "if" | "ifdef" | "ifndef")
}

/// Result of scanning a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreambleScan {
    pub offsets: PreambleOffsets,
    /// Number of include-like directives inside the preamble
    pub include_directives: usize,
}

/// Locate the preamble of `text`.
///
/// A preamble without any include directive is collapsed, since there is
/// nothing in it to turn into imports.
pub fn analyze_preamble(text: &str) -> PreambleOffsets {
    let mut lexer = RawLexer::new(text);
    let scan = scan_preamble(&mut lexer);
    let mut offsets = scan.offsets;
    if scan.include_directives == 0 {
        offsets.collapse();
    }
    offsets
}

/// Lex the next token that is not a comment
fn next_significant<S: TokenSource>(source: &mut S) -> Token {
    loop {
        let tok = source.next_token();
        if !tok.is(TokenKind::Comment) {
            return tok;
        }
    }
}

fn is_identifier<S: TokenSource>(source: &S, tok: &Token, expected: &str) -> bool {
    tok.is(TokenKind::Identifier) && source.spelling(tok) == expected
}

/// Candidate include guard found at the top of the file
struct GuardCandidate {
    def_start: usize,
    def_end: usize,
}

/// Try to match `#ifndef NAME` followed by `#define NAME` starting at `hash`.
///
/// On success returns the guard and the first token after the `#define`
/// line. On failure returns `None`; the lexer position is unspecified.
fn match_guard<S: TokenSource>(source: &mut S, hash: Token) -> Option<(GuardCandidate, Token)> {
    let keyword = next_significant(source);
    if keyword.at_start_of_line || !is_identifier(source, &keyword, "ifndef") {
        return None;
    }

    let name_tok = next_significant(source);
    if name_tok.at_start_of_line || !name_tok.is(TokenKind::Identifier) {
        return None;
    }
    let name = source.spelling(&name_tok).to_string();

    let define_hash = next_significant(source);
    if !define_hash.at_start_of_line || !define_hash.is(TokenKind::Hash) {
        return None;
    }

    let define = next_significant(source);
    if define.at_start_of_line || !is_identifier(source, &define, "define") {
        return None;
    }

    let defined = next_significant(source);
    if defined.at_start_of_line || !is_identifier(source, &defined, &name) {
        return None;
    }

    // The guard ends with the `#define` line, comments on it included.
    let mut after = source.next_token();
    while !after.at_start_of_line && !after.is(TokenKind::Eof) {
        after = source.next_token();
    }

    Some((
        GuardCandidate {
            def_start: hash.offset,
            def_end: after.offset,
        },
        after,
    ))
}

/// True if nothing but comments follows the directive line `keyword` is on
fn only_comments_after_line<S: TokenSource>(source: &mut S, keyword: &Token) -> bool {
    source.seek(keyword.end(), false);
    let mut tok = source.next_token();
    // Comments on the `#endif` line itself are fine.
    while !tok.at_start_of_line && !tok.is(TokenKind::Eof) {
        if !tok.is(TokenKind::Comment) {
            return false;
        }
        tok = source.next_token();
    }
    loop {
        match tok.kind {
            TokenKind::Eof => return true,
            TokenKind::Comment => tok = source.next_token(),
            _ => return false,
        }
    }
}

/// Scan the preamble of the buffer behind `source`
pub fn scan_preamble<S: TokenSource>(source: &mut S) -> PreambleScan {
    let mut tok = next_significant(source);

    // Step 1: a guard at the very top of the file.
    let mut guard: Option<GuardCandidate> = None;
    let mut first_directive: Option<usize> = None;
    let mut if_stack: Vec<usize> = Vec::new();

    if tok.at_start_of_line && tok.is(TokenKind::Hash) {
        let hash = tok;
        first_directive = Some(hash.offset);
        if let Some((candidate, after)) = match_guard(source, hash) {
            if_stack.push(candidate.def_start);
            guard = Some(candidate);
            tok = after;
        }
    }

    // Step 2: the start of the preamble.
    let mut preamble_start: Option<usize> = None;
    if guard.is_none() {
        if let Some(offset) = first_directive {
            preamble_start = Some(offset);
            source.seek(offset, true);
            tok = source.next_token();
        }
    }

    while preamble_start.is_none() {
        match tok.kind {
            TokenKind::Eof => preamble_start = Some(tok.offset),
            TokenKind::Comment => tok = source.next_token(),
            TokenKind::Identifier if source.spelling(&tok) == "module" => {
                // `module;` opens a global module fragment, which is not
                // part of the preamble.
                let module_tok = tok;
                let semi = next_significant(source);
                if semi.is(TokenKind::Semi) {
                    tok = source.next_token();
                } else {
                    source.seek(module_tok.offset, module_tok.at_start_of_line);
                    tok = source.next_token();
                    preamble_start = Some(module_tok.offset);
                }
            }
            _ => preamble_start = Some(tok.offset),
        }
    }
    let mut preamble_start = preamble_start.unwrap_or(0);

    // Step 3: the end of the preamble.
    let mut in_directive = false;
    let mut pending_comment: Option<usize> = None;
    let mut include_directives = 0;
    let mut guard_endif: Option<usize> = None;
    let mut guard_closed_in_preamble = false;
    let mut break_at: Option<usize> = None;

    while !tok.is(TokenKind::Eof) {
        if in_directive {
            if !tok.at_start_of_line {
                tok = source.next_token();
                continue;
            }
            pending_comment = None;
            in_directive = false;
        }

        if tok.is(TokenKind::Comment) {
            pending_comment.get_or_insert(tok.offset);
            tok = source.next_token();
            continue;
        }

        if tok.at_start_of_line && tok.is(TokenKind::Hash) {
            let hash = tok;
            in_directive = true;
            tok = source.next_token();

            // A null directive.
            if tok.at_start_of_line || tok.is(TokenKind::Eof) {
                continue;
            }

            if tok.is(TokenKind::Identifier) {
                let keyword_tok = tok;
                let keyword = source.spelling(&keyword_tok).to_string();

                if !if_stack.is_empty() && is_if_directive(&keyword) {
                    if_stack.push(hash.offset);
                }

                if !if_stack.is_empty() && keyword == "endif" {
                    if_stack.pop();
                    if if_stack.is_empty() {
                        if only_comments_after_line(source, &keyword_tok) {
                            guard_endif = Some(hash.offset);
                            guard_closed_in_preamble = true;
                            break_at = Some(hash.offset);
                            break;
                        }
                        // Something follows the `#endif`: it was never a guard
                        // for the whole file.
                        if let Some(candidate) = guard.take() {
                            preamble_start = candidate.def_start;
                        }
                        source.seek(keyword_tok.end(), false);
                    }
                }

                if PREAMBLE_DIRECTIVES.contains(&keyword.as_str()) {
                    if INCLUDE_DIRECTIVES.contains(&keyword.as_str()) {
                        include_directives += 1;
                    }
                    tok = source.next_token();
                    continue;
                }
            }

            break_at = Some(hash.offset);
            break;
        }

        // `import name;` lines count as directives too.
        if tok.at_start_of_line && tok.is(TokenKind::Identifier) && source.spelling(&tok) == "import"
        {
            let import_tok = tok;
            in_directive = true;
            tok = source.next_token();
            if tok.is(TokenKind::Identifier) && !tok.at_start_of_line {
                continue;
            }
            break_at = Some(import_tok.offset);
            break;
        }

        break_at = Some(tok.offset);
        break;
    }

    let break_at = break_at.unwrap_or(tok.offset);
    let preamble_end = pending_comment.unwrap_or(break_at).max(preamble_start);

    // Step 4: the guard is still open, look for its `#endif` in the body.
    if guard.is_some() && !guard_closed_in_preamble {
        guard_endif = find_guard_endif(source, tok, if_stack);
    }

    let controlling_macro = match (guard, guard_endif) {
        (Some(candidate), Some(endif)) => Some(ControllingMacroOffsets {
            def_start: candidate.def_start,
            def_end: candidate.def_end,
            endif,
        }),
        _ => None,
    };

    PreambleScan {
        offsets: PreambleOffsets {
            start: preamble_start,
            end: preamble_end,
            controlling_macro,
        },
        include_directives,
    }
}

/// Continue lexing from `tok` until the guard's `#endif`, which must be
/// followed by nothing but comments.
fn find_guard_endif<S: TokenSource>(
    source: &mut S,
    mut tok: Token,
    mut if_stack: Vec<usize>,
) -> Option<usize> {
    let mut endif: Option<usize> = None;

    while !tok.is(TokenKind::Eof) {
        if tok.is(TokenKind::Comment) {
            tok = source.next_token();
            continue;
        }

        if endif.is_some() {
            return None;
        }

        if tok.at_start_of_line && tok.is(TokenKind::Hash) {
            let hash = tok;
            tok = source.next_token();
            if tok.is(TokenKind::Identifier) && !tok.at_start_of_line {
                let keyword = source.spelling(&tok);
                if !if_stack.is_empty() && is_if_directive(keyword) {
                    if_stack.push(hash.offset);
                } else if !if_stack.is_empty() && keyword == "endif" {
                    if_stack.pop();
                    if if_stack.is_empty() {
                        endif = Some(hash.offset);
                    }
                }
                tok = source.next_token();
            }
            continue;
        }

        tok = source.next_token();
    }

    endif
}

/// Convenience wrapper lexing `text` and returning the raw scan
pub fn scan_text(text: &str) -> PreambleScan {
    scan_preamble(&mut RawLexer::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slice(text: &str, from: usize, to: usize) -> &str {
        &text[from..to]
    }

    #[test]
    fn test_guarded_header() {
        let text = "// Comments in the top of the file.
#ifndef A_H
#define A_H
// Comments before preamble
#include \"b.h\"
#include \"c.h\"

// Comments for a
int a;
#endif // A_H
";
        let offsets = analyze_preamble(text);
        assert!(slice(text, offsets.start, text.len()).starts_with("#include \"b.h\""));
        assert!(slice(text, offsets.end, text.len()).starts_with("// Comments for a"));

        let guard = offsets.controlling_macro.unwrap();
        assert!(slice(text, guard.def_start, text.len()).starts_with("#ifndef A_H"));
        assert!(slice(text, guard.def_end, text.len()).starts_with("// Comments before preamble"));
        assert!(slice(text, guard.endif, text.len()).starts_with("#endif // A_H"));
    }

    #[test]
    fn test_guard_with_trailing_code_is_demoted() {
        let text = "#ifndef FAKE
#define FAKE
#include \"c.h\"
#endif // FAKE
#include \"d.h\"
";
        let offsets = analyze_preamble(text);
        assert_eq!(offsets.start, 0);
        assert_eq!(offsets.end, text.len());
        assert_eq!(offsets.controlling_macro, None);
    }

    #[test]
    fn test_guard_closed_inside_preamble() {
        let text = "#ifndef G
#define G
#include \"x.h\"
#endif
// trailing
";
        let offsets = analyze_preamble(text);
        let guard = offsets.controlling_macro.unwrap();
        assert_eq!(guard.def_start, 0);
        assert!(slice(text, offsets.start, offsets.end).starts_with("#include"));
        assert_eq!(offsets.end, guard.endif);
    }

    #[test]
    fn test_source_without_guard() {
        let text = "// File Comments
#include \"a.h\"
#include \"b.h\"

int body = a;
";
        let offsets = analyze_preamble(text);
        assert_eq!(slice(text, offsets.start, offsets.end), "#include \"a.h\"\n#include \"b.h\"\n\n");
        assert_eq!(offsets.controlling_macro, None);
    }

    #[test]
    fn test_unmatched_guard_in_body() {
        let text = "#ifndef A_H
#define A_H
#include \"b.h\"
int a;
#endif
int b;
";
        let offsets = analyze_preamble(text);
        assert_eq!(offsets.controlling_macro, None);
        assert!(slice(text, offsets.start, text.len()).starts_with("#include"));
        assert!(slice(text, offsets.end, text.len()).starts_with("int a;"));
    }

    #[test]
    fn test_nested_conditionals_and_imports() {
        let text = "#pragma once
#ifdef USE_B
#include \"b.h\"
#endif // USE_B
import std;
// #include \"c.h\"
#include \"a.h\"
int use = a;
";
        let offsets = analyze_preamble(text);
        assert_eq!(offsets.start, 0);
        assert!(slice(text, offsets.end, text.len()).starts_with("int use"));
    }

    #[test]
    fn test_global_module_fragment_is_skipped() {
        let text = "module;\n#include \"a.h\"\nexport module m;\n";
        let offsets = analyze_preamble(text);
        assert!(slice(text, offsets.start, offsets.end).starts_with("#include \"a.h\""));
        assert!(slice(text, offsets.end, text.len()).starts_with("export module m;"));
    }

    #[test]
    fn test_macro_only_header_collapses() {
        let text = "#pragma once\n#define VALUE 43\nint b = VALUE;\n";
        let offsets = analyze_preamble(text);
        assert!(offsets.is_empty());

        let scan = scan_text(text);
        assert_eq!(scan.include_directives, 0);
        assert!(scan.offsets.end > scan.offsets.start);
    }

    #[test]
    fn test_unknown_directive_ends_preamble() {
        let text = "#include \"a.h\"\n#frobnicate\nint x;\n";
        let offsets = analyze_preamble(text);
        assert_eq!(offsets.end, text.find("#frob").unwrap());
    }

    #[test]
    fn test_guard_define_with_value_and_comment() {
        let text = "#ifndef A_H // guard
#define A_H 1
#include \"b.h\"
int a;
#endif
";
        let offsets = analyze_preamble(text);
        let guard = offsets.controlling_macro.unwrap();
        assert!(slice(text, guard.def_end, text.len()).starts_with("#include"));
    }

    #[test]
    fn test_byte_order_mark_before_preamble() {
        let text = "\u{feff}#include \"b.h\"\nint a;\n";
        let offsets = analyze_preamble(text);
        assert_eq!(offsets.start, 3);
        assert!(slice(text, offsets.end, text.len()).starts_with("int a;"));
    }

    #[test]
    fn test_crlf_guarded_header() {
        let text = "#ifndef A_H\r\n#define A_H\r\n#include \"b.h\"\r\n\r\nint a;\r\n#endif\r\n";
        let offsets = analyze_preamble(text);
        let guard = offsets.controlling_macro.unwrap();
        assert!(slice(text, guard.def_end, text.len()).starts_with("#include"));
        assert!(slice(text, offsets.end, text.len()).starts_with("int a;"));
        assert!(slice(text, guard.endif, text.len()).starts_with("#endif"));
    }
}
