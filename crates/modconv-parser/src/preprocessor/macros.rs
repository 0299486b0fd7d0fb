//! Macro definitions
//!
//! Command line `-D`/`-U` flags and the macro table entries built from them
//! and from `#define` directives.

use crate::lexer::{RawLexer, TokenKind, TokenSource};
use modconv_core::Location;

/// A macro given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition {
    pub name: String,
    /// `None` for `-U`
    pub value: Option<String>,
}

impl MacroDefinition {
    /// Create a macro that is simply defined (no value)
    pub fn defined(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some("1".to_string()),
        }
    }

    /// Create a macro with a specific value
    pub fn with_value(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    /// Create an undefined macro (for -U flag)
    pub fn undefined(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
        }
    }

    /// Parse the value of a `-D` flag: `NAME`, `NAME=VALUE` or `NAME(args)=VALUE`
    pub fn from_define_arg(arg: &str) -> Self {
        match arg.split_once('=') {
            Some((name, value)) => Self::with_value(name, value),
            None => Self::defined(arg),
        }
    }

    /// Render as a `#define` line
    pub fn to_define_line(&self) -> Option<String> {
        self.value
            .as_ref()
            .map(|v| format!("#define {} {}", self.name, v))
    }
}

/// A preprocessing token detached from its buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpToken {
    pub kind: TokenKind,
    pub text: String,
    /// Offset in the file the token was lexed from
    pub offset: usize,
    pub has_leading_space: bool,
}

impl PpToken {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
            has_leading_space: false,
        }
    }

    pub fn number(value: i64, offset: usize) -> Self {
        Self::new(TokenKind::Number, value.to_string(), offset)
    }

    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == name
    }
}

/// Lex `text` into tokens, dropping comments
pub fn tokenize(text: &str) -> Vec<PpToken> {
    let mut lexer = RawLexer::new(text);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next_token();
        match tok.kind {
            TokenKind::Eof => break,
            TokenKind::Comment => continue,
            _ => out.push(PpToken {
                kind: tok.kind,
                text: lexer.spelling(&tok).to_string(),
                offset: tok.offset,
                has_leading_space: tok.has_leading_space,
            }),
        }
    }
    out
}

/// Where a macro came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroOrigin {
    /// Predefined by the preprocessor itself
    Builtin,
    /// `-D` on the command line
    CommandLine,
    /// A `#define` in a file
    File(Location),
}

impl MacroOrigin {
    /// Location of the definition, if it has one in a real file
    pub fn location(&self) -> Option<&Location> {
        match self {
            MacroOrigin::File(loc) => Some(loc),
            _ => None,
        }
    }
}

/// A macro table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroInfo {
    pub name: String,
    /// Parameters of a function-like macro
    pub params: Option<Vec<String>>,
    pub variadic: bool,
    pub body: Vec<PpToken>,
    pub origin: MacroOrigin,
}

impl MacroInfo {
    pub fn object_like(name: &str, body: Vec<PpToken>, origin: MacroOrigin) -> Self {
        Self {
            name: name.to_string(),
            params: None,
            variadic: false,
            body,
            origin,
        }
    }

    pub fn is_function_like(&self) -> bool {
        self.params.is_some()
    }

    pub fn is_builtin(&self) -> bool {
        self.origin == MacroOrigin::Builtin
    }

    /// Build from the tokens following `#define` (name first)
    pub fn from_directive(tokens: &[PpToken], origin: MacroOrigin) -> Option<Self> {
        let name = tokens.first().filter(|t| t.kind == TokenKind::Identifier)?;
        let mut rest = &tokens[1..];
        let mut params = None;
        let mut variadic = false;

        // A function-like macro has its `(` glued to the name.
        if let Some(open) = rest.first() {
            if open.kind == TokenKind::LParen && !open.has_leading_space {
                let mut names = Vec::new();
                let mut i = 1;
                loop {
                    let tok = rest.get(i)?;
                    match tok.kind {
                        TokenKind::RParen => break,
                        TokenKind::Comma => {}
                        TokenKind::Identifier => names.push(tok.text.clone()),
                        TokenKind::Punct if tok.text == "..." => {
                            variadic = true;
                            names.push("__VA_ARGS__".to_string());
                        }
                        _ => return None,
                    }
                    i += 1;
                }
                params = Some(names);
                rest = &rest[i + 1..];
            }
        }

        Some(Self {
            name: name.text.clone(),
            params,
            variadic,
            body: rest.to_vec(),
            origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_arg() {
        assert_eq!(
            MacroDefinition::from_define_arg("USE_B"),
            MacroDefinition::defined("USE_B")
        );
        assert_eq!(
            MacroDefinition::from_define_arg("X=a=b"),
            MacroDefinition::with_value("X", "a=b")
        );
        assert_eq!(
            MacroDefinition::with_value("V", "2").to_define_line().unwrap(),
            "#define V 2"
        );
        assert!(MacroDefinition::undefined("V").to_define_line().is_none());
    }

    #[test]
    fn test_object_and_function_like() {
        let obj = MacroInfo::from_directive(&tokenize("VALUE (1 + 2)"), MacroOrigin::Builtin)
            .unwrap();
        assert!(!obj.is_function_like());
        assert_eq!(obj.body.len(), 5);

        let func =
            MacroInfo::from_directive(&tokenize("MAX(a, b, ...) ((a) > (b))"), MacroOrigin::Builtin)
                .unwrap();
        assert_eq!(
            func.params,
            Some(vec!["a".to_string(), "b".to_string(), "__VA_ARGS__".to_string()])
        );
        assert!(func.variadic);
    }

    #[test]
    fn test_malformed_define() {
        assert!(MacroInfo::from_directive(&tokenize("1 x"), MacroOrigin::Builtin).is_none());
        assert!(MacroInfo::from_directive(&tokenize("F(a"), MacroOrigin::Builtin).is_none());
    }
}
