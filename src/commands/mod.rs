// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod chmod;
pub mod echo;
pub mod file_cmd;
pub mod find;
pub mod grep;
pub mod head;
pub mod help_cmd;
pub mod interpreter;
pub mod ls;
pub mod pwd;
pub mod registry;
pub mod stat_cmd;
pub mod sudo;
pub mod tail;
pub mod touch;
pub mod types;
pub mod wc;
pub mod whoami;

pub use interpreter::{tokenize, Interpreter};
pub use registry::CommandRegistry;
pub use types::{Command, CommandResult};
