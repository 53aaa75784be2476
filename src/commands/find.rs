// src/commands/find.rs
use regex_lite::Regex;

use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct FindCommand;

/// Translate a `*`/`?` glob into an anchored regex matched against the full
/// name. Other characters pass through untranslated.
fn glob_to_regex(pattern: &str) -> Option<Regex> {
    let mut translated = String::with_capacity(pattern.len() + 2);
    translated.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            other => translated.push(other),
        }
    }
    translated.push('$');
    Regex::new(&translated).ok()
}

/// Depth-first pre-order walk, children in sorted order, restricted to
/// entries readable by the current user.
fn walk(
    fs: &Filesystem,
    dir_path: &str,
    display_path: &str,
    matcher: Option<&Regex>,
    results: &mut Vec<String>,
) {
    for child in fs.children(dir_path) {
        if !child.is_readable(&fs.current_user) {
            continue;
        }

        let child_display = format!("{}/{}", display_path, child.name).replace("//", "/");
        if matcher.map_or(true, |re| re.is_match(&child.name)) {
            results.push(child_display.clone());
        }

        if child.is_dir {
            let child_real = if dir_path == "/" {
                format!("/{}", child.name)
            } else {
                format!("{}/{}", dir_path, child.name)
            };
            walk(fs, &child_real, &child_display, matcher, results);
        }
    }
}

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        let start = match args.first() {
            Some(arg) if !arg.starts_with('-') => arg.as_str(),
            _ => ".",
        };

        let mut name_pattern = None;
        let mut i = 0;
        while i < args.len() {
            if args[i] == "-name" && i + 1 < args.len() {
                name_pattern = Some(args[i + 1].clone());
            }
            i += 1;
        }

        let Ok((start_path, _)) = fs.resolve(start) else {
            return CommandResult::error(format!(
                "find: '{}': No such file or directory",
                start
            ));
        };

        let matcher = match &name_pattern {
            Some(pattern) => match glob_to_regex(pattern) {
                Some(re) => Some(re),
                None => {
                    return CommandResult::error(format!("find: invalid pattern '{}'", pattern));
                }
            },
            None => None,
        };

        let mut results = Vec::new();
        // Result paths are joined from the start argument as given, with
        // doubled separators collapsed.
        walk(fs, &start_path, start, matcher.as_ref(), &mut results);

        CommandResult::success(results.join("\n"))
    }
}
