// src/commands/grep.rs
use regex_lite::Regex;

use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct GrepCommand;

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        if args.len() < 2 {
            return CommandResult::error("grep: missing arguments");
        }

        let pattern = &args[0];
        let filename = &args[1];

        let content = match fs.read_file(filename) {
            Ok(content) => content,
            Err(err) => return CommandResult::error(format!("grep: {}", err)),
        };

        // Search semantics, case-insensitive: a line matches if the pattern
        // matches anywhere in it.
        let Ok(regex) = Regex::new(&format!("(?i){}", pattern)) else {
            return CommandResult::error("grep: Invalid regular expression");
        };

        let matches: Vec<&str> = content
            .split('\n')
            .filter(|line| !line.is_empty() && regex.is_match(line))
            .collect();

        CommandResult::success(matches.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(fs: &mut Filesystem, line: &str) -> CommandResult {
        Interpreter::new().execute(fs, line)
    }

    #[test]
    fn finds_matching_lines() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "grep Password /tmp/log.txt");
        assert!(result.success);
        assert_eq!(result.output, "[2025-11-15] Password: hidden_flag_123");
    }

    #[test]
    fn matching_is_case_insensitive_search() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "grep password /tmp/log.txt");
        assert!(result.output.contains("hidden_flag_123"));
        // substring anywhere in the line, not a full-line match
        let result = exec(&mut fs, "grep flag /tmp/log.txt");
        assert!(result.output.contains("hidden_flag_123"));
    }

    #[test]
    fn no_match_is_empty_success() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "grep zebra /tmp/log.txt");
        assert!(result.success);
        assert_eq!(result.output, "");
    }

    #[test]
    fn invalid_pattern() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "grep ( /tmp/log.txt");
        assert!(!result.success);
        assert_eq!(result.error, "grep: Invalid regular expression");
    }

    #[test]
    fn target_errors() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "grep x /nope");
        assert_eq!(result.error, "grep: /nope: No such file or directory");

        let result = exec(&mut fs, "grep x /etc");
        assert_eq!(result.error, "grep: /etc: Is a directory");

        let result = exec(&mut fs, "grep x /etc/shadow");
        assert_eq!(result.error, "grep: /etc/shadow: Permission denied");
    }

    #[test]
    fn missing_arguments() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "grep onlypattern");
        assert_eq!(result.error, "grep: missing arguments");
    }

    #[test]
    fn extra_arguments_ignored() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "grep player /etc/passwd cut -d: -f1");
        assert!(result.success);
        assert!(result.output.contains("player:x:1000"));
    }
}
