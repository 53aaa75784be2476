// src/commands/stat_cmd.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::Filesystem;

pub struct StatCommand;

impl Command for StatCommand {
    fn name(&self) -> &'static str {
        "stat"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        let Some(target) = args.first() else {
            return CommandResult::error("stat: missing argument");
        };

        let node = match fs.resolve(target) {
            Ok((_, node)) => node,
            Err(err) => return CommandResult::error(format!("stat: {}", err)),
        };

        let report = format!(
            "File: {}\nSize: {} Bytes\nOwner: {}\nPermissions: {}\nModified: {}\nType: {}",
            target,
            node.size(),
            node.owner,
            node.permissions,
            node.modified.format("%Y-%m-%d %H:%M:%S"),
            if node.is_dir { "Directory" } else { "Regular file" }
        );

        CommandResult::success(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(fs: &mut Filesystem, line: &str) -> CommandResult {
        Interpreter::new().execute(fs, line)
    }

    #[test]
    fn file_report() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "stat /etc/shadow");
        assert!(result.success);
        let lines: Vec<&str> = result.output.lines().collect();
        assert_eq!(lines[0], "File: /etc/shadow");
        assert!(lines[1].starts_with("Size: "));
        assert_eq!(lines[2], "Owner: root");
        assert_eq!(lines[3], "Permissions: 640");
        assert!(lines[4].starts_with("Modified: "));
        assert_eq!(lines[5], "Type: Regular file");
    }

    #[test]
    fn directory_report() {
        let mut fs = Filesystem::new();
        let result = exec(&mut fs, "stat /etc");
        assert!(result.output.contains("Size: 4096 Bytes"));
        assert!(result.output.contains("Type: Directory"));
    }

    #[test]
    fn errors() {
        let mut fs = Filesystem::new();
        assert_eq!(exec(&mut fs, "stat").error, "stat: missing argument");
        assert_eq!(
            exec(&mut fs, "stat nope").error,
            "stat: nope: No such file or directory"
        );
    }
}
