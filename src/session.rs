//! Session
//!
//! Composes the filesystem, interpreter, and puzzle engine into one game
//! session. Each command cycle runs to completion: meta-commands are checked
//! first, everything else is dispatched to the interpreter, then the puzzle
//! context is updated from the raw command text and output, and the current
//! puzzle is re-checked. Reset replaces every component wholesale.

use std::time::Instant;

use crate::commands::{CommandResult, Interpreter};
use crate::fs::Filesystem;
use crate::puzzles::types::{
    BACKDOOR_CREATED, CONFIG_FILES_FOUND, DECODED, FOUND_PASSWORD, PERMS_CHANGED, READ_SHADOW,
};
use crate::puzzles::{Context, Progress, PuzzleEngine, PuzzleStatus};

/// One executed command with its result, kept for the whole session.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub command: String,
    pub success: bool,
    pub output: String,
    pub error: String,
}

pub struct Session {
    fs: Filesystem,
    interpreter: Interpreter,
    engine: PuzzleEngine,
    context: Context,
    history: Vec<HistoryEntry>,
    started: Instant,
    active: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            fs: Filesystem::new(),
            interpreter: Interpreter::new(),
            engine: PuzzleEngine::new(),
            context: Context::new(),
            history: Vec::new(),
            started: Instant::now(),
            active: true,
        }
    }

    /// Discard all state and start over with fresh components.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn filesystem(&self) -> &Filesystem {
        &self.fs
    }

    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// Won when every registered puzzle is completed.
    pub fn is_won(&self) -> bool {
        self.engine.is_complete()
    }

    pub fn total_score(&self) -> u32 {
        self.engine.total_score()
    }

    /// Run one full command cycle.
    pub fn execute(&mut self, line: &str) -> CommandResult {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        match lowered.as_str() {
            "exit" => {
                self.active = false;
                return CommandResult::success("Goodbye!");
            }
            "hint" => return self.handle_hint(),
            "status" => return self.handle_status(),
            "puzzles" => return self.handle_puzzles(),
            _ => {}
        }
        if lowered.starts_with("solve ") {
            return self.handle_solve(trimmed["solve ".len()..].trim());
        }

        let mut result = self.interpreter.execute(&mut self.fs, line);
        self.history.push(HistoryEntry {
            command: line.to_string(),
            success: result.success,
            output: result.output.clone(),
            error: result.error.clone(),
        });

        self.update_context(line, &result);

        if let Some((_, score)) = self.engine.check_current(&self.context, self.elapsed_seconds()) {
            if !result.output.is_empty() {
                result.output.push('\n');
            }
            result
                .output
                .push_str(&format!("Puzzle completed! Score: {} points", score));
        }

        result
    }

    fn handle_hint(&mut self) -> CommandResult {
        match self.engine.next_hint() {
            Ok(text) => CommandResult::success(format!("Hint: {}", text)),
            Err(err) => CommandResult::error(err.to_string()),
        }
    }

    fn handle_status(&self) -> CommandResult {
        let progress = self.progress();
        CommandResult::success(format!(
            "User: {}\nLocation: {}\nElapsed Time: {} seconds\n\nProgress: {}/{} puzzles completed\nScore: {} points\nCompletion: {:.1}%",
            self.fs.current_user,
            self.fs.current_dir,
            self.elapsed_seconds(),
            progress.completed,
            progress.total,
            progress.score,
            progress.percentage,
        ))
    }

    fn handle_puzzles(&self) -> CommandResult {
        let mut output = vec!["Challenges:".to_string()];
        for puzzle in self.engine.puzzles() {
            let marker = if puzzle.status == PuzzleStatus::Completed {
                "x"
            } else {
                " "
            };
            output.push(format!(
                "\n[{}] {} (difficulty {})",
                marker, puzzle.title, puzzle.difficulty
            ));
            output.push(format!("    ID: {}", puzzle.id));
            output.push(format!("    {}", puzzle.description));
        }
        output.push("\nUse 'solve <puzzle_id>' to activate a puzzle".to_string());
        CommandResult::success(output.join("\n"))
    }

    fn handle_solve(&mut self, id: &str) -> CommandResult {
        match self.engine.start_puzzle(id) {
            Ok(puzzle) => {
                let objectives: Vec<String> = puzzle
                    .objectives
                    .iter()
                    .map(|obj| format!("- {}", obj))
                    .collect();
                CommandResult::success(format!(
                    "Puzzle activated: {}\n\n{}\n\nObjectives:\n{}",
                    puzzle.title,
                    puzzle.description,
                    objectives.join("\n")
                ))
            }
            Err(err) => CommandResult::error(err.to_string()),
        }
    }

    pub fn progress(&self) -> Progress {
        self.engine.progress()
    }

    /// Derive context flags by scanning the raw command text and output of a
    /// successful execution. Brittle by design: the exact trigger substrings
    /// are part of the game's observable behavior.
    fn update_context(&mut self, command: &str, result: &CommandResult) {
        if !result.success {
            return;
        }

        if command.contains("grep")
            && command.to_lowercase().contains("password")
            && (result.output.contains("hidden_flag") || result.output.contains("flag"))
        {
            self.context.set_flag(FOUND_PASSWORD);
        }

        if command.contains("sudo cat /etc/shadow") {
            self.context.set_flag(READ_SHADOW);
        }

        if command.contains("find") && command.contains(".conf") {
            let count = result.output.matches('\n').count() as u32 + 1;
            self.context.set_count(CONFIG_FILES_FOUND, count);
        }

        if command.contains("chmod") && command.contains("777") {
            self.context.set_flag(PERMS_CHANGED);
        }

        if command.contains("cut") && command.contains("/etc/passwd") {
            self.context.set_flag(DECODED);
        }

        if command.contains("chmod") && command.contains("755") && command.contains("backdoor") {
            self.context.set_flag(BACKDOOR_CREATED);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
