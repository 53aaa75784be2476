// src/commands/wc.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct WcCommand;

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        let Some(target) = args.first() else {
            return CommandResult::error("wc: missing argument");
        };

        let node = match fs.resolve(target) {
            Ok((_, node)) => node,
            Err(err) => return CommandResult::error(format!("wc: {}", err)),
        };

        let lines = node.content.matches('\n').count();
        let words = node.content.split_whitespace().count();
        let chars = node.content.chars().count();

        CommandResult::success(format!("{} {} {} {}", lines, words, chars, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(fs: &mut Filesystem, line: &str) -> CommandResult {
        Interpreter::new().execute(fs, line)
    }

    #[test]
    fn counts_newlines_tokens_chars() {
        let mut fs = Filesystem::new();
        fs.change_directory("/tmp").unwrap();
        fs.create_file("sample", "one two\nthree\n").unwrap();
        assert_eq!(exec(&mut fs, "wc sample").output, "2 3 14 sample");
    }

    #[test]
    fn notes_file() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "wc /home/player/notes.txt");
        // "Remember: The password is hidden in the log files\n"
        assert_eq!(result.output, "1 9 50 /home/player/notes.txt");
    }

    #[test]
    fn errors() {
        let mut fs = Filesystem::new();
        assert_eq!(exec(&mut fs, "wc").error, "wc: missing argument");
        assert_eq!(
            exec(&mut fs, "wc /nope").error,
            "wc: /nope: No such file or directory"
        );
    }
}
