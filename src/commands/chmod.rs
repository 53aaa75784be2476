// src/commands/chmod.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct ChmodCommand;

impl Command for ChmodCommand {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        if args.len() < 2 {
            return CommandResult::error("chmod: missing arguments");
        }

        let permissions = &args[0];
        let filename = &args[1];

        if permissions.len() != 3 || !permissions.chars().all(|c| c.is_ascii_digit()) {
            return CommandResult::error("chmod: invalid permissions");
        }

        match fs.chmod(filename, permissions) {
            Ok(()) => CommandResult::success(""),
            Err(_) => CommandResult::error(format!(
                "chmod: {}: No such file or directory",
                filename
            )),
        }
    }
}
