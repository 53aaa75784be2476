// src/commands/file_cmd.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct FileCommand;

impl Command for FileCommand {
    fn name(&self) -> &'static str {
        "file"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        let Some(target) = args.first() else {
            return CommandResult::error("file: missing argument");
        };

        let node = match fs.resolve(target) {
            Ok((_, node)) => node,
            Err(err) => return CommandResult::error(format!("file: {}", err)),
        };

        // classified by the resolved node's own name, not the argument text
        let file_type = if node.is_dir {
            "directory"
        } else if node.name.ends_with(".txt") {
            "ASCII text"
        } else if node.size() == 0 {
            "empty"
        } else {
            "data"
        };

        CommandResult::success(format!("{}: {}", target, file_type))
    }
}
