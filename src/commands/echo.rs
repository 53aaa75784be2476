// src/commands/echo.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, _interp: &Interpreter, _fs: &mut Filesystem, args: &[String]) -> CommandResult {
        // verbatim join, no variable or escape interpretation
        CommandResult::success(args.join(" "))
    }
}
