// src/commands/ls.rs
use crate::commands::{Command, CommandResult, Interpreter};
use crate::fs::{Filesystem, Node};

pub struct LsCommand;

fn long_entry(node: &Node) -> String {
    let file_type = if node.is_dir { "d" } else { "-" };
    format!(
        "{}{} {} {} {} {}",
        file_type,
        node.permissions,
        node.owner,
        node.size(),
        node.modified.format("%b %d %H:%M"),
        node.name
    )
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, _interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult {
        let mut target = ".".to_string();
        let mut long_format = false;
        let mut all_files = false;

        for arg in args {
            match arg.as_str() {
                "-l" => long_format = true,
                "-a" => all_files = true,
                other if !other.starts_with('-') => target = other.to_string(),
                _ => {}
            }
        }

        let Ok((path, node)) = fs.resolve(&target) else {
            return CommandResult::error(format!(
                "ls: cannot access '{}': No such file or directory",
                target
            ));
        };

        if !node.is_dir {
            return CommandResult::error(format!("ls: '{}' is not a directory", target));
        }

        if !node.is_readable(&fs.current_user) {
            return CommandResult::error(format!(
                "ls: cannot open directory '{}': Permission denied",
                target
            ));
        }

        let mut output = Vec::new();
        for child in fs.children(&path) {
            if !all_files && child.name.starts_with('.') {
                continue;
            }
            if long_format {
                output.push(long_entry(child));
            } else {
                output.push(child.name.clone());
            }
        }

        CommandResult::success(output.join("\n"))
    }
}
