// src/commands/cat.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error("cat: missing operand");
        }

        // Per-file handling is independent: failures become inline lines and
        // never abort the remaining arguments.
        let mut output = Vec::new();
        for filename in args {
            match fs.read_file(filename) {
                Ok(content) => output.push(content.trim_end().to_string()),
                Err(err) => output.push(format!("cat: {}", err)),
            }
        }

        CommandResult::success(output.join("\n"))
    }
}
