//! Raw C++ lexer
//!
//! Tokenizes source text without any macro expansion. Comments are kept as
//! tokens so callers can reason about the layout of a file, and every token
//! knows whether it is the first one on its line.

/// Kind of a raw token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    /// `#`
    Hash,
    /// `##`
    HashHash,
    Identifier,
    Number,
    StringLiteral,
    CharLiteral,
    /// `;`
    Semi,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// Any other punctuator
    Punct,
    Eof,
}

/// A token as a byte range of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
    pub len: usize,
    /// First token on its line (line splices do not start a new line)
    pub at_start_of_line: bool,
    /// Preceded by whitespace or a comment
    pub has_leading_space: bool,
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Raw token stream over one buffer
pub trait TokenSource {
    /// Lex the next token; returns `Eof` forever once the end is reached
    fn next_token(&mut self) -> Token;

    /// Continue lexing at `offset`
    fn seek(&mut self, offset: usize, at_start_of_line: bool);

    /// Source text of a token
    fn spelling(&self, token: &Token) -> &str;
}

const PUNCTUATORS: &[&str] = &[
    "<=>", "<<=", ">>=", "...", "->*", "##", "::", "->", "++", "--", "<<", ">>", "<=", ">=",
    "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", ".*",
];

/// Lexer over a string buffer
pub struct RawLexer<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    at_start_of_line: bool,
}

/// Decode file contents for lexing.
///
/// Bytes that are not valid UTF-8 become `?` one for one, so offsets into
/// the result are offsets into `bytes`.
pub fn decode_source(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let bad = e.error_len().unwrap_or(after.len());
                out.extend(std::iter::repeat('?').take(bad));
                rest = &after[bad..];
            }
        }
    }
}

const BOM: &str = "\u{feff}";

impl<'a> RawLexer<'a> {
    /// A leading byte order mark is skipped.
    pub fn new(text: &'a str) -> Self {
        let pos = if text.starts_with(BOM) { BOM.len() } else { 0 };
        Self {
            text,
            bytes: text.as_bytes(),
            pos,
            at_start_of_line: true,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Current byte position
    pub fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self, ahead: usize) -> u8 {
        self.bytes.get(self.pos + ahead).copied().unwrap_or(0)
    }

    /// Skip whitespace and line splices. Returns true if anything was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\n' => {
                    self.at_start_of_line = true;
                    self.pos += 1;
                }
                b' ' | b'\t' | b'\r' | 0x0b | 0x0c => self.pos += 1,
                b'\\' if self.splice_len(self.pos) > 0 => self.pos += self.splice_len(self.pos),
                _ => break,
            }
        }
        self.pos != start
    }

    /// Length of a backslash-newline splice at `at`, 0 if there is none
    fn splice_len(&self, at: usize) -> usize {
        if self.bytes.get(at) != Some(&b'\\') {
            return 0;
        }
        let mut i = at + 1;
        while matches!(self.bytes.get(i), Some(b' ') | Some(b'\t')) {
            i += 1;
        }
        match (self.bytes.get(i), self.bytes.get(i + 1)) {
            (Some(b'\n'), _) => i + 1 - at,
            (Some(b'\r'), Some(b'\n')) => i + 2 - at,
            _ => 0,
        }
    }

    fn lex_line_comment(&mut self) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\n' => break,
                b'\\' if self.splice_len(self.pos) > 0 => self.pos += self.splice_len(self.pos),
                _ => self.pos += 1,
            }
        }
    }

    fn lex_block_comment(&mut self) {
        self.pos += 2;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'*' && self.peek(1) == b'/' {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }

    fn is_ident_start(b: u8) -> bool {
        b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
    }

    fn is_ident_continue(b: u8) -> bool {
        Self::is_ident_start(b) || b.is_ascii_digit()
    }

    fn lex_identifier(&mut self) {
        while self.pos < self.bytes.len() && Self::is_ident_continue(self.bytes[self.pos]) {
            self.pos += 1;
        }
    }

    fn lex_number(&mut self) {
        self.pos += 1;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if matches!(b, b'+' | b'-')
                && matches!(self.bytes[self.pos - 1], b'e' | b'E' | b'p' | b'P')
            {
                self.pos += 1;
            } else if Self::is_ident_continue(b) || b == b'.' {
                self.pos += 1;
            } else if b == b'\'' && Self::is_ident_continue(self.peek(1)) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Lex a quoted literal starting at the opening quote
    fn lex_quoted(&mut self, quote: u8) {
        self.pos += 1;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\\' => self.pos += 2,
                b'\n' => return,
                b if b == quote => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
        self.pos = self.pos.min(self.bytes.len());
    }

    /// Lex `R"delim( ... )delim"` starting at the opening quote
    fn lex_raw_string(&mut self) {
        let open = self.pos + 1;
        let Some(paren) = self.text[open..].find('(') else {
            self.lex_quoted(b'"');
            return;
        };
        let delimiter = &self.text[open..open + paren];
        let terminator = format!("){}\"", delimiter);
        let body = open + paren + 1;
        self.pos = match self.text[body..].find(&terminator) {
            Some(end) => body + end + terminator.len(),
            None => self.bytes.len(),
        };
    }

    fn lex_punct(&mut self) -> TokenKind {
        let rest = &self.bytes[self.pos..];
        for p in PUNCTUATORS {
            if rest.starts_with(p.as_bytes()) {
                self.pos += p.len();
                return if *p == "##" {
                    TokenKind::HashHash
                } else {
                    TokenKind::Punct
                };
            }
        }

        let b = rest[0];
        self.pos += 1;
        match b {
            b'#' => TokenKind::Hash,
            b';' => TokenKind::Semi,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            _ => {
                // Keep multi-byte characters whole.
                while self.pos < self.bytes.len() && !self.text.is_char_boundary(self.pos) {
                    self.pos += 1;
                }
                TokenKind::Punct
            }
        }
    }
}

impl<'a> TokenSource for RawLexer<'a> {
    fn next_token(&mut self) -> Token {
        let has_leading_space = self.skip_whitespace();
        let at_start_of_line = self.at_start_of_line;
        let start = self.pos;

        if self.pos >= self.bytes.len() {
            return Token {
                kind: TokenKind::Eof,
                offset: self.bytes.len(),
                len: 0,
                at_start_of_line,
                has_leading_space,
            };
        }

        let b = self.bytes[self.pos];
        let kind = match b {
            b'/' if self.peek(1) == b'/' => {
                self.lex_line_comment();
                TokenKind::Comment
            }
            b'/' if self.peek(1) == b'*' => {
                self.lex_block_comment();
                TokenKind::Comment
            }
            b'"' => {
                self.lex_quoted(b'"');
                TokenKind::StringLiteral
            }
            b'\'' => {
                self.lex_quoted(b'\'');
                TokenKind::CharLiteral
            }
            b'.' if self.peek(1).is_ascii_digit() => {
                self.lex_number();
                TokenKind::Number
            }
            b if b.is_ascii_digit() => {
                self.lex_number();
                TokenKind::Number
            }
            b if Self::is_ident_start(b) => {
                self.lex_identifier();
                let prefix = &self.text[start..self.pos];
                match (prefix, self.peek(0)) {
                    ("R" | "u8R" | "uR" | "UR" | "LR", b'"') => {
                        self.lex_raw_string();
                        TokenKind::StringLiteral
                    }
                    ("u8" | "u" | "U" | "L", b'"') => {
                        self.lex_quoted(b'"');
                        TokenKind::StringLiteral
                    }
                    ("u8" | "u" | "U" | "L", b'\'') => {
                        self.lex_quoted(b'\'');
                        TokenKind::CharLiteral
                    }
                    _ => TokenKind::Identifier,
                }
            }
            _ => self.lex_punct(),
        };

        self.at_start_of_line = false;
        Token {
            kind,
            offset: start,
            len: self.pos - start,
            at_start_of_line,
            has_leading_space,
        }
    }

    fn seek(&mut self, offset: usize, at_start_of_line: bool) {
        self.pos = offset.min(self.bytes.len());
        self.at_start_of_line = at_start_of_line;
    }

    fn spelling(&self, token: &Token) -> &str {
        &self.text[token.offset..token.end()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(text: &str) -> Vec<(TokenKind, String, bool)> {
        let mut lexer = RawLexer::new(text);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            if tok.is(TokenKind::Eof) {
                break;
            }
            out.push((tok.kind, lexer.spelling(&tok).to_string(), tok.at_start_of_line));
        }
        out
    }

    #[test]
    fn test_directive_tokens() {
        let toks = lex_all("#include <vector>\n#define X(a) a##1\n");
        let kinds: Vec<TokenKind> = toks.iter().map(|t| t.0).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Hash,
                TokenKind::Identifier,
                TokenKind::Punct,
                TokenKind::Identifier,
                TokenKind::Punct,
                TokenKind::Hash,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::Identifier,
                TokenKind::HashHash,
                TokenKind::Number,
            ]
        );
        assert!(toks[0].2);
        assert!(!toks[1].2);
        assert!(toks[5].2);
    }

    #[test]
    fn test_comments_are_tokens() {
        let toks = lex_all("// a\n/* b\n c */ int x;");
        assert_eq!(toks[0], (TokenKind::Comment, "// a".to_string(), true));
        assert_eq!(toks[1], (TokenKind::Comment, "/* b\n c */".to_string(), true));
        assert_eq!(toks[2], (TokenKind::Identifier, "int".to_string(), false));
    }

    #[test]
    fn test_line_splice_does_not_start_a_line() {
        let toks = lex_all("#define A \\\n  1\nint");
        assert_eq!(toks[3], (TokenKind::Number, "1".to_string(), false));
        assert_eq!(toks[4], (TokenKind::Identifier, "int".to_string(), true));
    }

    #[test]
    fn test_literals() {
        let toks = lex_all(r#"u8"x" 'c' R"d(a ")" b)d" 0x1fULL 1e+5 1'000"#);
        let spellings: Vec<&str> = toks.iter().map(|t| t.1.as_str()).collect();
        assert_eq!(
            spellings,
            vec![r#"u8"x""#, "'c'", r#"R"d(a ")" b)d""#, "0x1fULL", "1e+5", "1'000"]
        );
        assert_eq!(toks[2].0, TokenKind::StringLiteral);
    }

    #[test]
    fn test_punctuators_and_seek() {
        let mut lexer = RawLexer::new("a <=> b; c");
        lexer.next_token();
        let op = lexer.next_token();
        assert_eq!(lexer.spelling(&op), "<=>");
        assert!(lexer.next_token().is(TokenKind::Identifier));
        assert!(lexer.next_token().is(TokenKind::Semi));

        lexer.seek(0, true);
        let first = lexer.next_token();
        assert_eq!(lexer.spelling(&first), "a");
        assert!(first.at_start_of_line);
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let toks = lex_all("\u{feff}#include \"b.h\"\n");
        assert_eq!(toks[0], (TokenKind::Hash, "#".to_string(), true));
        assert_eq!(toks[1].1, "include");
    }

    #[test]
    fn test_decode_source_keeps_offsets() {
        let bytes = b"// caf\xE9\n#include \"\xC3\xA9.h\"\n";
        let text = decode_source(bytes);
        assert_eq!(text.len(), bytes.len());
        assert_eq!(text, "// caf?\n#include \"\u{e9}.h\"\n");
        assert_eq!(text.find('#'), Some(8));

        let truncated = decode_source(b"a\xC3");
        assert_eq!(truncated, "a?");
    }
}
