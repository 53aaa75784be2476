// src/commands/types.rs
use serde::Serialize;

use crate::commands::interpreter::Interpreter;
use crate::fs::Filesystem;

/// Uniform result of one command execution. Exactly one of `output`/`error`
/// carries data.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    pub success: bool,
    pub output: String,
    pub error: String,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: String::new(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: error.into(),
        }
    }
}

/// One command handler. Handlers get the interpreter back so re-dispatching
/// commands (sudo) can nest an execution.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, interp: &Interpreter, fs: &mut Filesystem, args: &[String]) -> CommandResult;
}
