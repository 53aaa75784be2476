// src/commands/cd.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        let path = match args.first() {
            Some(arg) => arg.clone(),
            None => format!("/home/{}", fs.current_user),
        };

        match fs.change_directory(&path) {
            Ok(()) => CommandResult::success(""),
            Err(_) => CommandResult::error(format!("cd: {}: No such file or directory", path)),
        }
    }
}
