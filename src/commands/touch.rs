// src/commands/touch.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error("touch: missing argument");
        }

        for filename in args {
            // creation is restricted to the current directory; a path
            // argument fails the whole command
            if filename.contains('/') {
                return CommandResult::error(format!(
                    "touch: {}: No such file or directory",
                    filename
                ));
            }

            if fs.child(filename).is_none() {
                if let Err(err) = fs.create_file(filename, "") {
                    return CommandResult::error(format!("touch: {}", err));
                }
            }
        }

        CommandResult::success("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(fs: &mut Filesystem, line: &str) -> CommandResult {
        Interpreter::new().execute(fs, line)
    }

    #[test]
    fn creates_empty_file_as_current_user() {
        let mut fs = Filesystem::new();
        fs.change_directory("/tmp").unwrap();
        assert!(exec(&mut fs, "touch backdoor.sh").success);
        let node = fs.child("backdoor.sh").unwrap();
        assert_eq!(node.owner, "player");
        assert_eq!(node.size(), 0);
        assert!(!node.is_dir);
    }

    #[test]
    fn multiple_arguments() {
        let mut fs = Filesystem::new();
        fs.change_directory("/tmp").unwrap();
        assert!(exec(&mut fs, "touch a b c").success);
        for name in ["a", "b", "c"] {
            assert!(fs.child(name).is_some());
        }
    }

    #[test]
    fn existing_file_is_untouched() {
        let mut fs = Filesystem::new();
        fs.change_directory("/tmp").unwrap();
        assert!(exec(&mut fs, "touch log.txt").success);
        assert!(fs.child("log.txt").unwrap().content.contains("hidden_flag_123"));
    }

    #[test]
    fn rejects_path_separators() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "touch /tmp/x");
        assert!(!result.success);
        assert_eq!(result.error, "touch: /tmp/x: No such file or directory");
        assert!(fs.node("/tmp/x").is_none());
    }

    #[test]
    fn missing_argument() {
        let mut fs = Filesystem::new();
        assert_eq!(exec(&mut fs, "touch").error, "touch: missing argument");
    }
}
