//! Command line splitting
//!
//! Splits a command string the way a POSIX shell would tokenize it, without
//! any expansion. Used for `default_compile_commands` and for compilation
//! database entries that carry a `command` string.

use tracing::warn;

/// Split `command` into arguments.
///
/// A command with an unterminated quote or a trailing backslash is split on
/// whitespace instead.
pub fn split_command_line(command: &str) -> Vec<String> {
    match shlex::split(command) {
        Some(args) => args,
        None => {
            warn!("Malformed quoting in command line: {}", command);
            command.split_whitespace().map(str::to_string).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        assert_eq!(
            split_command_line("  -I/a   -DX=1 -c"),
            vec!["-I/a", "-DX=1", "-c"]
        );
    }

    #[test]
    fn test_quotes_and_escapes() {
        assert_eq!(
            split_command_line(r#"-DMSG="hello world" '-I/my dir' a\ b.cc"#),
            vec!["-DMSG=hello world", "-I/my dir", "a b.cc"]
        );
        assert_eq!(split_command_line(r#"-DQ="\"x\"""#), vec![r#"-DQ="x""#]);
    }

    #[test]
    fn test_empty_quotes_make_an_argument() {
        assert_eq!(split_command_line("a '' b"), vec!["a", "", "b"]);
        assert!(split_command_line("   ").is_empty());
    }

    #[test]
    fn test_unterminated_quote_falls_back_to_whitespace() {
        assert_eq!(split_command_line("-DX=\"a b -c"), vec!["-DX=\"a", "b", "-c"]);
    }
}
