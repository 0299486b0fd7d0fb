//! Preprocessing engine
//!
//! Walks a translation unit directive by directive. Conditionals are
//! evaluated, includes are entered and macros are tracked; ordinary tokens
//! are only looked at in the main file, where imports, module declarations
//! and macro uses are reported.

use super::expr;
use super::headers::{FoundIn, HeaderResolver};
use super::invocation::{CompilerInvocation, PreprocessError};
use super::macros::{tokenize, MacroInfo, MacroOrigin, PpToken};
use super::observer::{InclusionEvent, PreprocessObserver};
use crate::lexer::{decode_source, RawLexer, Token, TokenKind, TokenSource};
use modconv_core::Location;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const MAX_INCLUDE_DEPTH: usize = 200;

/// Operators answered with a constant, they take a parenthesized argument
const HAS_OPERATORS: &[&str] = &[
    "__has_feature",
    "__has_extension",
    "__has_builtin",
    "__has_attribute",
    "__has_cpp_attribute",
    "__has_c_attribute",
    "__has_declspec_attribute",
    "__has_warning",
    "__is_identifier",
    "__building_module",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found while preprocessing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Location,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", self.location, level, self.message)
    }
}

/// A file being preprocessed
struct SourceFile {
    path: PathBuf,
    text: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    fn new(path: PathBuf, text: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            path,
            text,
            line_starts,
        }
    }

    fn location(&self, offset: usize) -> Location {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let column = offset.saturating_sub(self.line_starts[line]);
        Location::new(&self.path, offset, line as u32 + 1, column as u32 + 1)
    }

    fn spelling(&self, token: &Token) -> &str {
        &self.text[token.offset..token.end()]
    }

    fn pp_tokens(&self, tokens: &[Token]) -> Vec<PpToken> {
        tokens
            .iter()
            .map(|t| PpToken {
                kind: t.kind,
                text: self.spelling(t).to_string(),
                offset: t.offset,
                has_leading_space: t.has_leading_space,
            })
            .collect()
    }
}

/// Token stream that treats comments as whitespace
struct Cursor<'a> {
    lexer: RawLexer<'a>,
    pending: Option<Token>,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lexer: RawLexer::new(text),
            pending: None,
        }
    }

    fn next(&mut self) -> Token {
        if let Some(tok) = self.pending.take() {
            return tok;
        }
        let mut at_start_of_line = false;
        let mut has_leading_space = false;
        loop {
            let mut tok = self.lexer.next_token();
            if tok.is(TokenKind::Comment) {
                at_start_of_line |= tok.at_start_of_line;
                has_leading_space = true;
                continue;
            }
            tok.at_start_of_line |= at_start_of_line;
            tok.has_leading_space |= has_leading_space;
            return tok;
        }
    }

    fn peek(&mut self) -> Token {
        let tok = self.next();
        self.pending = Some(tok);
        tok
    }

    fn push_back(&mut self, tok: Token) {
        self.pending = Some(tok);
    }

    /// Remaining tokens of the current logical line
    fn rest_of_line(&mut self) -> Vec<Token> {
        let mut out = Vec::new();
        loop {
            let tok = self.next();
            if tok.is(TokenKind::Eof) || tok.at_start_of_line {
                self.push_back(tok);
                return out;
            }
            out.push(tok);
        }
    }
}

/// State of one `#if` group
struct Conditional {
    parent_active: bool,
    taken: bool,
    active: bool,
    seen_else: bool,
    location: Location,
}

/// A token during macro expansion
#[derive(Debug, Clone)]
struct ExpToken {
    tok: PpToken,
    hide: Vec<String>,
    /// Written in the file rather than produced by an expansion
    from_source: bool,
}

impl ExpToken {
    fn produced(tok: PpToken) -> Self {
        Self {
            tok,
            hide: Vec::new(),
            from_source: false,
        }
    }
}

/// Preprocessor for one translation unit
pub struct Preprocessor {
    invocation: CompilerInvocation,
    resolver: HeaderResolver,
    macros: HashMap<String, MacroInfo>,
    pragma_once: HashSet<PathBuf>,
    diagnostics: Vec<Diagnostic>,
    counter: i64,
}

impl Preprocessor {
    pub fn new(invocation: CompilerInvocation) -> Self {
        let resolver = HeaderResolver::for_invocation(&invocation);
        let mut macros = builtin_macros(&invocation);

        for def in &invocation.macros {
            match &def.value {
                Some(value) => {
                    let info = MacroInfo::from_directive(
                        &tokenize(&format!("{} {}", def.name, value)),
                        MacroOrigin::CommandLine,
                    )
                    .unwrap_or_else(|| {
                        MacroInfo::object_like(&def.name, tokenize(value), MacroOrigin::CommandLine)
                    });
                    macros.insert(info.name.clone(), info);
                }
                None => {
                    macros.remove(&def.name);
                }
            }
        }

        Self {
            invocation,
            resolver,
            macros,
            pragma_once: HashSet::new(),
            diagnostics: Vec::new(),
            counter: 0,
        }
    }

    pub fn invocation(&self) -> &CompilerInvocation {
        &self.invocation
    }

    pub fn macro_info(&self, name: &str) -> Option<&MacroInfo> {
        self.macros.get(name)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Preprocess the input file of the invocation
    pub fn run(&mut self, observer: &mut dyn PreprocessObserver) -> Result<(), PreprocessError> {
        let input = self.invocation.input.clone();
        let text = read_source(&input).map_err(|source| PreprocessError::Io {
            path: input.clone(),
            source,
        })?;
        let main = SourceFile::new(canonical(&input), text);

        let builtin = Location::new("<built-in>", 0, 1, 1);
        for forced in self.invocation.forced_includes.clone() {
            let resolved = forced.is_file().then(|| canonical(&forced));
            observer.inclusion_directive(&InclusionEvent {
                hash: builtin.clone(),
                text: forced.display().to_string(),
                angled: false,
                resolved: resolved.clone(),
                in_main_file: false,
            });
            match resolved {
                Some(path) => self.enter_file(&path, FoundIn::Absolute, 1, &builtin, observer),
                None => self.report(
                    Severity::Error,
                    builtin.clone(),
                    format!("'{}' file not found", forced.display()),
                    observer,
                ),
            }
        }

        debug!("Preprocessing {}", main.path.display());
        self.process(&main, 0, FoundIn::Absolute, observer);
        Ok(())
    }

    fn report(
        &mut self,
        severity: Severity,
        location: Location,
        message: String,
        observer: &mut dyn PreprocessObserver,
    ) {
        let diagnostic = Diagnostic {
            severity,
            location,
            message,
        };
        trace!("{}", diagnostic);
        observer.diagnostic(&diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn enter_file(
        &mut self,
        path: &Path,
        found: FoundIn,
        depth: usize,
        from: &Location,
        observer: &mut dyn PreprocessObserver,
    ) {
        if self.pragma_once.contains(path) {
            return;
        }
        if depth > MAX_INCLUDE_DEPTH {
            self.report(
                Severity::Error,
                from.clone(),
                "#include nested too deeply".to_string(),
                observer,
            );
            return;
        }
        match read_source(path) {
            Ok(text) => {
                let file = SourceFile::new(path.to_path_buf(), text);
                self.process(&file, depth, found, observer);
            }
            Err(e) => self.report(
                Severity::Error,
                from.clone(),
                format!("cannot open '{}': {}", path.display(), e),
                observer,
            ),
        }
    }

    fn process(
        &mut self,
        file: &SourceFile,
        depth: usize,
        found: FoundIn,
        observer: &mut dyn PreprocessObserver,
    ) {
        let mut cursor = Cursor::new(&file.text);
        let mut conditionals: Vec<Conditional> = Vec::new();

        loop {
            let tok = cursor.next();
            match tok.kind {
                TokenKind::Eof => break,
                TokenKind::Hash if tok.at_start_of_line => {
                    let line = cursor.rest_of_line();
                    self.directive(file, depth, found, &tok, &line, &mut conditionals, observer);
                }
                _ if depth > 0 || !is_active(&conditionals) => {}
                TokenKind::Identifier => self.main_file_identifier(file, tok, &mut cursor, observer),
                _ => {}
            }
        }

        for cond in conditionals {
            self.report(
                Severity::Error,
                cond.location,
                "unterminated conditional directive".to_string(),
                observer,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn directive(
        &mut self,
        file: &SourceFile,
        depth: usize,
        found: FoundIn,
        hash: &Token,
        line: &[Token],
        conditionals: &mut Vec<Conditional>,
        observer: &mut dyn PreprocessObserver,
    ) {
        // Null directive
        let Some(name_tok) = line.first() else {
            return;
        };
        let active = is_active(conditionals);
        let name = file.spelling(name_tok);
        let args = &line[1..];
        let location = file.location(hash.offset);

        match name {
            "if" | "ifdef" | "ifndef" => {
                if !active {
                    conditionals.push(Conditional {
                        parent_active: false,
                        taken: true,
                        active: false,
                        seen_else: false,
                        location,
                    });
                    return;
                }
                let value = match name {
                    "if" => self.eval_condition(file, depth, args, &location, observer),
                    _ => self.eval_ifdef(file, depth, name, args, &location, observer),
                };
                conditionals.push(Conditional {
                    parent_active: true,
                    taken: value,
                    active: value,
                    seen_else: false,
                    location,
                });
            }
            "elif" | "elifdef" | "elifndef" => {
                let Some(cond) = conditionals.last_mut() else {
                    self.report(Severity::Error, location, format!("#{} without #if", name), observer);
                    return;
                };
                if cond.seen_else {
                    self.report(Severity::Error, location, format!("#{} after #else", name), observer);
                    return;
                }
                if cond.parent_active && !cond.taken {
                    let value = match name {
                        "elif" => self.eval_condition(file, depth, args, &location, observer),
                        "elifdef" => self.eval_ifdef(file, depth, "ifdef", args, &location, observer),
                        _ => self.eval_ifdef(file, depth, "ifndef", args, &location, observer),
                    };
                    cond.active = value;
                    cond.taken = value;
                } else {
                    cond.active = false;
                }
            }
            "else" => {
                let Some(cond) = conditionals.last_mut() else {
                    self.report(Severity::Error, location, "#else without #if".to_string(), observer);
                    return;
                };
                if cond.seen_else {
                    self.report(Severity::Error, location, "#else after #else".to_string(), observer);
                    return;
                }
                cond.active = cond.parent_active && !cond.taken;
                cond.taken = true;
                cond.seen_else = true;
            }
            "endif" => {
                if conditionals.pop().is_none() {
                    self.report(Severity::Error, location, "#endif without #if".to_string(), observer);
                }
            }
            _ if !active => {}
            "include" | "include_next" | "import" => {
                self.include(file, depth, found, name, args, location, observer)
            }
            "define" => {
                let tokens = file.pp_tokens(args);
                let origin = match args.first() {
                    Some(t) => MacroOrigin::File(file.location(t.offset)),
                    None => MacroOrigin::File(location.clone()),
                };
                match MacroInfo::from_directive(&tokens, origin) {
                    Some(info) => {
                        self.macros.insert(info.name.clone(), info);
                    }
                    None => self.report(
                        Severity::Error,
                        location,
                        "macro name must be an identifier".to_string(),
                        observer,
                    ),
                }
            }
            "undef" => match args.first().filter(|t| t.is(TokenKind::Identifier)) {
                Some(t) => {
                    self.macros.remove(file.spelling(t));
                }
                None => self.report(Severity::Error, location, "macro name missing".to_string(), observer),
            },
            "pragma" => {
                if args.first().is_some_and(|t| file.spelling(t) == "once") {
                    self.pragma_once.insert(file.path.clone());
                }
            }
            "error" | "warning" => {
                let message = match (args.first(), args.last()) {
                    (Some(first), Some(last)) => file.text[first.offset..last.end()].to_string(),
                    _ => String::new(),
                };
                let severity = if name == "error" {
                    Severity::Error
                } else {
                    Severity::Warning
                };
                self.report(severity, location, message, observer);
            }
            "line" | "ident" | "sccs" | "assert" | "unassert" => {}
            // GNU line marker
            _ if name_tok.is(TokenKind::Number) => {}
            _ => self.report(
                Severity::Error,
                location,
                format!("invalid preprocessing directive '#{}'", name),
                observer,
            ),
        }
    }

    fn eval_ifdef(
        &mut self,
        file: &SourceFile,
        depth: usize,
        kind: &str,
        args: &[Token],
        location: &Location,
        observer: &mut dyn PreprocessObserver,
    ) -> bool {
        let Some(name_tok) = args.first().filter(|t| t.is(TokenKind::Identifier)) else {
            self.report(Severity::Error, location.clone(), "macro name missing".to_string(), observer);
            return false;
        };
        let name = file.spelling(name_tok);
        if kind == "ifndef" && depth == 0 {
            observer.ifndef(&file.location(name_tok.offset), name);
        }
        let defined = self.macros.contains_key(name);
        if kind == "ifdef" {
            defined
        } else {
            !defined
        }
    }

    fn eval_condition(
        &mut self,
        file: &SourceFile,
        depth: usize,
        args: &[Token],
        location: &Location,
        observer: &mut dyn PreprocessObserver,
    ) -> bool {
        if args.is_empty() {
            self.report(Severity::Error, location.clone(), "expected value in expression".to_string(), observer);
            return false;
        }
        let tokens = self.replace_operators(file.pp_tokens(args), file);
        let tokens = self.expand(tokens, file, depth == 0, observer);
        let tokens = self.replace_operators(tokens, file);
        match expr::evaluate(&tokens) {
            Ok(value) => value != 0,
            Err(e) => {
                self.report(Severity::Error, location.clone(), e.to_string(), observer);
                false
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn include(
        &mut self,
        file: &SourceFile,
        depth: usize,
        found: FoundIn,
        directive: &str,
        args: &[Token],
        location: Location,
        observer: &mut dyn PreprocessObserver,
    ) {
        let Some((text, angled)) = self.header_name(file, depth, args, observer) else {
            self.report(
                Severity::Error,
                location,
                "expected \"FILENAME\" or <FILENAME>".to_string(),
                observer,
            );
            return;
        };

        let result = match (directive, found) {
            ("include_next", FoundIn::SearchPath(_)) if depth > 0 => {
                self.resolver.resolve_next(&text, found)
            }
            _ => self.resolver.resolve_from(&text, angled, Some(&file.path), None),
        };

        observer.inclusion_directive(&InclusionEvent {
            hash: location.clone(),
            text: text.clone(),
            angled,
            resolved: result.as_ref().map(|(path, _)| path.clone()),
            in_main_file: depth == 0,
        });

        match result {
            Some((path, found_in)) => self.enter_file(&path, found_in, depth + 1, &location, observer),
            None => self.report(
                Severity::Warning,
                location,
                format!("'{}' file not found", text),
                observer,
            ),
        }
    }

    /// Spelling of the header name of an include directive
    fn header_name(
        &mut self,
        file: &SourceFile,
        depth: usize,
        args: &[Token],
        observer: &mut dyn PreprocessObserver,
    ) -> Option<(String, bool)> {
        let first = args.first()?;
        match first.kind {
            TokenKind::StringLiteral => {
                let quoted = file.spelling(first);
                Some((quoted.strip_prefix('"')?.strip_suffix('"')?.to_string(), false))
            }
            TokenKind::Punct if file.spelling(first) == "<" => {
                let end = args.last()?.end();
                let rest = &file.text[first.end()..end];
                let close = rest.find('>')?;
                Some((rest[..close].to_string(), true))
            }
            _ => {
                // Computed include
                let tokens = self.expand(file.pp_tokens(args), file, depth == 0, observer);
                let first = tokens.first()?;
                if first.kind == TokenKind::StringLiteral {
                    let text = first.text.strip_prefix('"')?.strip_suffix('"')?;
                    return Some((text.to_string(), false));
                }
                if first.text != "<" {
                    return None;
                }
                let mut name = String::new();
                for tok in &tokens[1..] {
                    if tok.text == ">" {
                        return Some((name, true));
                    }
                    if tok.has_leading_space && !name.is_empty() {
                        name.push(' ');
                    }
                    name.push_str(&tok.text);
                }
                None
            }
        }
    }

    /// Replace `defined` and the `__has_*` operators by their values
    fn replace_operators(&self, tokens: Vec<PpToken>, file: &SourceFile) -> Vec<PpToken> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let tok = &tokens[i];
            if tok.kind == TokenKind::Identifier {
                match tok.text.as_str() {
                    "defined" => {
                        let (name, consumed) = match tokens.get(i + 1) {
                            Some(open) if open.kind == TokenKind::LParen => (tokens.get(i + 2), 4),
                            other => (other, 2),
                        };
                        let value = name
                            .filter(|n| n.kind == TokenKind::Identifier)
                            .is_some_and(|n| self.macros.contains_key(&n.text));
                        out.push(PpToken::number(value as i64, tok.offset));
                        i += consumed;
                        continue;
                    }
                    "__has_include" | "__has_include_next" => {
                        if let Some((inner, consumed)) = paren_group(&tokens[i + 1..]) {
                            let value = self.has_include(inner, file);
                            out.push(PpToken::number(value as i64, tok.offset));
                            i += 1 + consumed;
                            continue;
                        }
                    }
                    name if HAS_OPERATORS.contains(&name) => {
                        if let Some((_, consumed)) = paren_group(&tokens[i + 1..]) {
                            let value = (name == "__is_identifier") as i64;
                            out.push(PpToken::number(value, tok.offset));
                            i += 1 + consumed;
                            continue;
                        }
                    }
                    _ => {}
                }
            }
            out.push(tok.clone());
            i += 1;
        }
        out
    }

    fn has_include(&self, inner: &[PpToken], file: &SourceFile) -> bool {
        let (name, angled) = match inner {
            [single] if single.kind == TokenKind::StringLiteral => {
                (single.text.trim_matches('"').to_string(), false)
            }
            [open, middle @ .., close] if open.text == "<" && close.text == ">" => {
                (middle.iter().map(|t| t.text.as_str()).collect::<String>(), true)
            }
            _ => return false,
        };
        self.resolver
            .resolve(&name, angled, Some(&file.path))
            .is_some()
    }

    fn expand(
        &mut self,
        tokens: Vec<PpToken>,
        file: &SourceFile,
        report_uses: bool,
        observer: &mut dyn PreprocessObserver,
    ) -> Vec<PpToken> {
        let input = tokens
            .into_iter()
            .map(|tok| ExpToken {
                tok,
                hide: Vec::new(),
                from_source: true,
            })
            .collect();
        self.expand_tokens(input, file, report_uses, observer)
            .into_iter()
            .map(|t| t.tok)
            .collect()
    }

    /// Rescan `input` until no expandable macro is left
    fn expand_tokens(
        &mut self,
        input: Vec<ExpToken>,
        file: &SourceFile,
        report_uses: bool,
        observer: &mut dyn PreprocessObserver,
    ) -> Vec<ExpToken> {
        let mut input: VecDeque<ExpToken> = input.into();
        let mut out = Vec::new();

        while let Some(t) = input.pop_front() {
            if t.tok.kind != TokenKind::Identifier || t.hide.contains(&t.tok.text) {
                out.push(t);
                continue;
            }
            let Some(info) = self.macros.get(&t.tok.text).cloned() else {
                out.push(t);
                continue;
            };
            // The `__has_*` operators are replaced before expansion.
            if info.is_builtin() && info.is_function_like() {
                out.push(t);
                continue;
            }

            let args = if info.is_function_like() {
                if !input.front().is_some_and(|n| n.tok.kind == TokenKind::LParen) {
                    out.push(t);
                    continue;
                }
                let Some((args, consumed)) = collect_args(&input, &info) else {
                    out.push(t);
                    continue;
                };
                input.drain(..consumed);
                args
            } else {
                Vec::new()
            };

            if report_uses && t.from_source {
                observer.macro_expands(&file.location(t.tok.offset), &info);
            }

            let replacement = match self.dynamic_builtin(&info.name, &t.tok, file) {
                Some(tok) => vec![ExpToken::produced(tok)],
                None => self.substitute(&info, &args, file, report_uses, observer),
            };

            let mut hide = t.hide.clone();
            hide.push(info.name.clone());
            for (i, mut r) in replacement.into_iter().enumerate().rev() {
                r.tok.offset = t.tok.offset;
                if i == 0 {
                    r.tok.has_leading_space = t.tok.has_leading_space;
                }
                r.hide.extend(hide.iter().cloned());
                r.from_source = false;
                input.push_front(r);
            }
        }
        out
    }

    fn dynamic_builtin(&mut self, name: &str, at: &PpToken, file: &SourceFile) -> Option<PpToken> {
        let tok = match name {
            "__LINE__" => PpToken::number(file.location(at.offset).line as i64, at.offset),
            "__COUNTER__" => {
                let value = self.counter;
                self.counter += 1;
                PpToken::number(value, at.offset)
            }
            "__FILE__" => PpToken::new(
                TokenKind::StringLiteral,
                format!("\"{}\"", file.path.display()),
                at.offset,
            ),
            "__DATE__" => PpToken::new(TokenKind::StringLiteral, "\"Jan  1 1970\"", at.offset),
            "__TIME__" => PpToken::new(TokenKind::StringLiteral, "\"00:00:00\"", at.offset),
            _ => return None,
        };
        Some(tok)
    }

    /// Replace parameters in the body of `info` and apply `#` and `##`
    fn substitute(
        &mut self,
        info: &MacroInfo,
        args: &[Vec<ExpToken>],
        file: &SourceFile,
        report_uses: bool,
        observer: &mut dyn PreprocessObserver,
    ) -> Vec<ExpToken> {
        let params = info.params.clone().unwrap_or_default();
        let param_index = |tok: &PpToken| {
            if tok.kind == TokenKind::Identifier {
                params.iter().position(|p| *p == tok.text)
            } else {
                None
            }
        };

        let body = &info.body;
        let mut out: Vec<ExpToken> = Vec::new();
        let mut paste_pending = false;
        let mut i = 0;

        while i < body.len() {
            let tok = &body[i];
            if tok.kind == TokenKind::HashHash {
                paste_pending = true;
                i += 1;
                continue;
            }

            let next_is_paste = body
                .get(i + 1)
                .is_some_and(|n| n.kind == TokenKind::HashHash);
            let stringized = if tok.kind == TokenKind::Hash && info.is_function_like() {
                body.get(i + 1).and_then(param_index)
            } else {
                None
            };

            let mut piece = if let Some(idx) = stringized {
                i += 1;
                vec![ExpToken::produced(stringize(&args[idx], tok.offset))]
            } else {
                match param_index(tok) {
                    Some(idx) if paste_pending || next_is_paste => args[idx].clone(),
                    Some(idx) => self.expand_tokens(args[idx].clone(), file, report_uses, observer),
                    None => vec![ExpToken::produced(tok.clone())],
                }
            };

            if paste_pending && !piece.is_empty() {
                if let Some(last) = out.pop() {
                    let rhs = piece.remove(0);
                    out.extend(paste(last, rhs));
                }
            }
            paste_pending = false;
            out.extend(piece);
            i += 1;
        }
        out
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(CompilerInvocation::default())
    }
}

fn is_active(conditionals: &[Conditional]) -> bool {
    conditionals.last().map_or(true, |c| c.active)
}

// Main file body: imports, module declarations and macro uses.
impl Preprocessor {
    fn main_file_identifier(
        &mut self,
        file: &SourceFile,
        tok: Token,
        cursor: &mut Cursor<'_>,
        observer: &mut dyn PreprocessObserver,
    ) {
        let mut keyword = tok;
        let mut exported = false;
        if tok.at_start_of_line && file.spelling(&tok) == "export" {
            let next = cursor.peek();
            if next.is(TokenKind::Identifier) && matches!(file.spelling(&next), "import" | "module") {
                keyword = cursor.next();
                exported = true;
            }
        }

        if keyword.at_start_of_line || exported {
            let handled = match file.spelling(&keyword) {
                "import" => self.module_import(file, &keyword, cursor, observer),
                "module" => self.module_declaration(file, &keyword, cursor, observer),
                _ => false,
            };
            if handled || exported {
                return;
            }
        }

        let name = file.spelling(&tok);
        let Some(info) = self.macros.get(name) else {
            return;
        };
        if info.is_function_like() && !cursor.peek().is(TokenKind::LParen) {
            return;
        }
        observer.macro_expands(&file.location(tok.offset), info);
    }

    /// Tokens up to the terminating `;`, concatenated
    fn module_name(file: &SourceFile, cursor: &mut Cursor<'_>) -> String {
        let mut name = String::new();
        let mut in_attributes = false;
        loop {
            let tok = cursor.next();
            if tok.is(TokenKind::Eof) || (tok.is(TokenKind::Hash) && tok.at_start_of_line) {
                cursor.push_back(tok);
                break;
            }
            if tok.is(TokenKind::Semi) {
                break;
            }
            let spelling = file.spelling(&tok);
            if spelling == "[" {
                in_attributes = true;
            }
            if !in_attributes {
                name.push_str(spelling);
            }
        }
        name
    }

    fn module_import(
        &mut self,
        file: &SourceFile,
        keyword: &Token,
        cursor: &mut Cursor<'_>,
        observer: &mut dyn PreprocessObserver,
    ) -> bool {
        let next = cursor.peek();
        let named = match next.kind {
            TokenKind::Identifier => true,
            TokenKind::Punct if file.spelling(&next) == ":" => true,
            // Header units
            TokenKind::StringLiteral => false,
            TokenKind::Punct if file.spelling(&next) == "<" => false,
            _ => return false,
        };
        let name = Self::module_name(file, cursor);
        if named && !name.is_empty() {
            observer.module_import(&file.location(keyword.offset), &name);
        }
        true
    }

    fn module_declaration(
        &mut self,
        file: &SourceFile,
        keyword: &Token,
        cursor: &mut Cursor<'_>,
        observer: &mut dyn PreprocessObserver,
    ) -> bool {
        let next = cursor.peek();
        match next.kind {
            // Global module fragment
            TokenKind::Semi => {
                cursor.next();
                true
            }
            TokenKind::Identifier => {
                let name = Self::module_name(file, cursor);
                observer.module_declaration(&file.location(keyword.offset), &name);
                true
            }
            // `module :private;`
            TokenKind::Punct if file.spelling(&next) == ":" => {
                Self::module_name(file, cursor);
                true
            }
            _ => false,
        }
    }
}

/// Split the arguments of a function-like macro call.
///
/// `input` starts at the opening parenthesis. Returns the arguments and the
/// number of tokens they span, or `None` if the call is not closed.
fn collect_args(input: &VecDeque<ExpToken>, info: &MacroInfo) -> Option<(Vec<Vec<ExpToken>>, usize)> {
    let param_count = info.params.as_ref().map_or(0, Vec::len);
    let mut depth = 0usize;
    let mut args: Vec<Vec<ExpToken>> = vec![Vec::new()];

    for (i, t) in input.iter().enumerate() {
        match t.tok.kind {
            TokenKind::LParen => {
                depth += 1;
                if depth == 1 {
                    continue;
                }
            }
            TokenKind::RParen => {
                depth -= 1;
                if depth == 0 {
                    if param_count == 0 && args.len() == 1 && args[0].is_empty() {
                        args.clear();
                    }
                    while args.len() < param_count {
                        args.push(Vec::new());
                    }
                    return Some((args, i + 1));
                }
            }
            TokenKind::Comma if depth == 1 => {
                let in_variadic_tail = info.variadic && args.len() >= param_count;
                if !in_variadic_tail {
                    args.push(Vec::new());
                    continue;
                }
            }
            _ => {}
        }
        args.last_mut()?.push(t.clone());
    }
    None
}

fn stringize(arg: &[ExpToken], offset: usize) -> PpToken {
    let mut text = String::from("\"");
    for (i, t) in arg.iter().enumerate() {
        if i > 0 && t.tok.has_leading_space {
            text.push(' ');
        }
        for c in t.tok.text.chars() {
            if matches!(c, '"' | '\\') && matches!(t.tok.kind, TokenKind::StringLiteral | TokenKind::CharLiteral) {
                text.push('\\');
            }
            text.push(c);
        }
    }
    text.push('"');
    PpToken::new(TokenKind::StringLiteral, text, offset)
}

fn paste(lhs: ExpToken, rhs: ExpToken) -> Vec<ExpToken> {
    let joined = format!("{}{}", lhs.tok.text, rhs.tok.text);
    let mut hide = lhs.hide;
    hide.extend(rhs.hide);
    tokenize(&joined)
        .into_iter()
        .map(|mut tok| {
            tok.offset = lhs.tok.offset;
            tok.has_leading_space = lhs.tok.has_leading_space;
            ExpToken {
                tok,
                hide: hide.clone(),
                from_source: false,
            }
        })
        .collect()
}

/// `tokens` must start with `(`; returns the inner tokens and the count
/// including both parentheses
fn paren_group(tokens: &[PpToken]) -> Option<(&[PpToken], usize)> {
    if tokens.first()?.kind != TokenKind::LParen {
        return None;
    }
    let mut depth = 0usize;
    for (i, tok) in tokens.iter().enumerate() {
        match tok.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some((&tokens[1..i], i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

fn builtin_macros(invocation: &CompilerInvocation) -> HashMap<String, MacroInfo> {
    let mut object_like: Vec<(&str, String)> = vec![
        ("__clang__", "1".into()),
        ("__clang_major__", "17".into()),
        ("__GNUC__", "4".into()),
        ("__GNUC_MINOR__", "2".into()),
        ("__STDC__", "1".into()),
        ("__STDC_HOSTED__", "1".into()),
        ("__FILE__", String::new()),
        ("__LINE__", String::new()),
        ("__COUNTER__", String::new()),
        ("__DATE__", String::new()),
        ("__TIME__", String::new()),
    ];

    let is_c = invocation
        .language
        .as_deref()
        .is_some_and(|l| l == "c" || l == "c-header");
    if !is_c {
        object_like.push(("__cplusplus", format!("{}L", invocation.cplusplus_version())));
        if invocation.has_modules() {
            object_like.push(("__cpp_modules", "201907L".into()));
        }
    }
    if cfg!(unix) {
        object_like.push(("__unix__", "1".into()));
    }
    if cfg!(target_os = "linux") {
        object_like.push(("__linux__", "1".into()));
    }

    let mut macros: HashMap<String, MacroInfo> = object_like
        .into_iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                MacroInfo::object_like(name, tokenize(&value), MacroOrigin::Builtin),
            )
        })
        .collect();

    for name in ["__has_include", "__has_include_next"].iter().chain(HAS_OPERATORS) {
        macros.insert(
            name.to_string(),
            MacroInfo {
                name: name.to_string(),
                params: Some(vec!["x".to_string()]),
                variadic: false,
                body: Vec::new(),
                origin: MacroOrigin::Builtin,
            },
        );
    }
    macros
}

fn read_source(path: &Path) -> std::io::Result<String> {
    std::fs::read(path).map(|bytes| decode_source(&bytes))
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
