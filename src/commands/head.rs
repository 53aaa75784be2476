// src/commands/head.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        // fixed 10-line window; the filename is always the last argument and
        // anything before it is ignored
        let Some(filename) = args.last() else {
            return CommandResult::error("head: missing argument");
        };

        let node = match fs.resolve(filename) {
            Ok((_, node)) => node,
            Err(err) => return CommandResult::error(format!("head: {}", err)),
        };

        let lines: Vec<&str> = node.content.split('\n').take(10).collect();
        CommandResult::success(lines.join("\n"))
    }
}
