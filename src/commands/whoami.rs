// src/commands/whoami.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, _args: &[String]) -> CommandResult {
        CommandResult::success(fs.current_user.clone())
    }
}
