// src/commands/tail.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        let Some(filename) = args.last() else {
            return CommandResult::error("tail: missing argument");
        };

        let node = match fs.resolve(filename) {
            Ok((_, node)) => node,
            Err(err) => return CommandResult::error(format!("tail: {}", err)),
        };

        let lines: Vec<&str> = node.content.split('\n').collect();
        let skip = lines.len().saturating_sub(10);
        CommandResult::success(lines[skip..].join("\n"))
    }
}
