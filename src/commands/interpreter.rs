//! Command Interpreter
//!
//! Tokenizes a command line and dispatches it against the registry. This is
//! the fault boundary: nothing a handler does escapes past `execute`.

use std::panic::{self, AssertUnwindSafe};

use super::registry::{default_registry, CommandRegistry};
use super::types::CommandResult;
use crate::fs::Filesystem;

pub struct Interpreter {
    registry: CommandRegistry,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
        }
    }

    /// Execute one command line against the filesystem.
    pub fn execute(&self, fs: &mut Filesystem, line: &str) -> CommandResult {
        if line.trim().is_empty() {
            return CommandResult::success("");
        }

        let parts = tokenize(line);
        if parts.is_empty() {
            return CommandResult::error("Invalid command");
        }

        let name = parts[0].to_lowercase();
        let args = &parts[1..];

        let Some(cmd) = self.registry.get(&name) else {
            return CommandResult::error(format!("Command not found: {}", name));
        };

        match panic::catch_unwind(AssertUnwindSafe(|| cmd.execute(self, fs, args))) {
            Ok(result) => result,
            Err(_) => CommandResult::error(format!("{}: internal error", name)),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a command line on unescaped spaces. A pair of unescaped double
/// quotes delimits one token that may contain spaces; a backslash directly
/// before a quote suppresses the quote's toggle (the backslash stays). No
/// other escape handling.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' && !current.ends_with('\\') {
            in_quotes = !in_quotes;
        } else if ch == ' ' && !in_quotes {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_plain_words() {
        assert_eq!(tokenize("ls -l /tmp"), vec!["ls", "-l", "/tmp"]);
        assert_eq!(tokenize("  cat   a  "), vec!["cat", "a"]);
    }

    #[test]
    fn tokenize_quoted_spaces() {
        assert_eq!(
            tokenize("grep \"hello world\" log.txt"),
            vec!["grep", "hello world", "log.txt"]
        );
    }

    #[test]
    fn tokenize_escaped_quote_keeps_backslash() {
        assert_eq!(tokenize("echo \\\"hi\\\""), vec!["echo", "\\\"hi\\\""]);
    }

    #[test]
    fn tokenize_unclosed_quote_runs_to_end() {
        assert_eq!(tokenize("echo \"a b"), vec!["echo", "a b"]);
    }

    #[test]
    fn empty_line_is_success() {
        let interp = Interpreter::new();
        let mut fs = Filesystem::new();
        let result = interp.execute(&mut fs, "   ");
        assert!(result.success);
        assert!(result.output.is_empty());
    }

    #[test]
    fn bare_quotes_are_invalid() {
        let interp = Interpreter::new();
        let mut fs = Filesystem::new();
        let result = interp.execute(&mut fs, "\"\"");
        assert!(!result.success);
        assert_eq!(result.error, "Invalid command");
    }

    #[test]
    fn unknown_command() {
        let interp = Interpreter::new();
        let mut fs = Filesystem::new();
        let result = interp.execute(&mut fs, "frobnicate now");
        assert!(!result.success);
        assert_eq!(result.error, "Command not found: frobnicate");
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let interp = Interpreter::new();
        let mut fs = Filesystem::new();
        let result = interp.execute(&mut fs, "WHOAMI");
        assert!(result.success);
        assert_eq!(result.output, "player");
    }
}
