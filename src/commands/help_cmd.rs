// src/commands/help_cmd.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct HelpCommand;

const HELP_TEXT: &str = "\
Available commands:
ls [options] [path]     - List directory contents
cat [file]              - Display file contents
pwd                     - Print working directory
cd [path]               - Change directory
whoami                  - Print current user
grep [pattern] [file]   - Search text patterns
find [path] [-name]     - Search for files
chmod [perms] [file]    - Change file permissions
echo [text]             - Print text
file [path]             - Determine file type
wc [file]               - Count lines/words/characters
head [file]             - Display first lines
tail [file]             - Display last lines
stat [file]             - Display file statistics
touch [file]            - Create/update file
sudo [command]          - Execute as root
help                    - Show this help";

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _interp: &Interpreter, _fs: &mut Filesystem, _args: &[String]) -> CommandResult {
        CommandResult::success(HELP_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::COMMAND_NAMES;

    #[test]
    fn mentions_every_command() {
        let interp = Interpreter::new();
        let mut fs = Filesystem::new();
        let result = interp.execute(&mut fs, "help");
        assert!(result.success);
        for name in COMMAND_NAMES {
            assert!(result.output.contains(name), "help misses {}", name);
        }
    }
}
