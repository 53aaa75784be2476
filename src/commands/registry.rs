// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::chmod::ChmodCommand;
use super::echo::EchoCommand;
use super::file_cmd::FileCommand;
use super::find::FindCommand;
use super::grep::GrepCommand;
use super::head::HeadCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::pwd::PwdCommand;
use super::stat_cmd::StatCommand;
use super::sudo::SudoCommand;
use super::tail::TailCommand;
use super::touch::TouchCommand;
use super::wc::WcCommand;
use super::whoami::WhoamiCommand;

/// The fixed command surface of the simulated shell.
pub const COMMAND_NAMES: [&str; 17] = [
    "ls", "cat", "pwd", "cd", "whoami", "grep", "find", "chmod", "echo",
    "file", "wc", "head", "tail", "stat", "touch", "sudo", "help",
];

/// Build the registry with every supported command installed.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(GrepCommand));
    registry.register(Box::new(FindCommand));
    registry.register(Box::new(ChmodCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(FileCommand));
    registry.register(Box::new(WcCommand));
    registry.register(Box::new(HeadCommand));
    registry.register(Box::new(TailCommand));
    registry.register(Box::new(StatCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(SudoCommand));
    registry.register(Box::new(HelpCommand));
    debug_assert!(COMMAND_NAMES.iter().all(|name| registry.contains(name)));
    registry
}
