// src/commands/pwd.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, _args: &[String]) -> CommandResult {
        CommandResult::success(fs.current_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_current_dir() {
        let interp = Interpreter::new();
        let mut fs = Filesystem::new();
        assert_eq!(interp.execute(&mut fs, "pwd").output, "/");
        fs.change_directory("/home/player").unwrap();
        assert_eq!(interp.execute(&mut fs, "pwd").output, "/home/player");
    }
}
