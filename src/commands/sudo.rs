// src/commands/sudo.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct SudoCommand;

impl Command for SudoCommand {
    fn name(&self) -> &'static str {
        "sudo"
    }

    fn execute(&self, interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error("sudo: missing command");
        }

        // One scoped privilege swap. The nested execution cannot unwind past
        // the interpreter's fault boundary, so the restore always runs.
        let saved = std::mem::replace(&mut fs.current_user, "root".to_string());
        let result = interp.execute(fs, &args.join(" "));
        fs.current_user = saved;

        result
    }
}
