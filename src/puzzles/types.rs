//! Puzzle Types
//!
//! Puzzle records, the derived-flag context, and the validator predicates
//! expressed as data over named context keys.

use std::collections::HashMap;

use thiserror::Error;

/// Context keys written by the session and read by validators. Keeping them
/// in one place ties the trigger scanning and the puzzle catalog together.
pub const FOUND_PASSWORD: &str = "found_password";
pub const READ_SHADOW: &str = "read_shadow";
pub const CONFIG_FILES_FOUND: &str = "config_files_found";
pub const PERMS_CHANGED: &str = "perms_changed";
pub const DECODED: &str = "decoded";
pub const BACKDOOR_CREATED: &str = "backdoor_created";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Puzzle '{0}' not found or already completed.")]
    NotAvailable(String),

    #[error("No active puzzle. Use 'puzzles' to see available challenges.")]
    NoActivePuzzle,

    #[error("No more hints available for this puzzle.")]
    NoMoreHints,
}

/// Puzzle completion status. `Locked` is declared for parity with the
/// status model but no transition ever assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleStatus {
    Locked,
    Available,
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Hint {
    pub text: String,
    pub revealed: bool,
}

/// Transient map of flags and counters derived from command history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextValue {
    Flag(bool),
    Count(u32),
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    values: HashMap<String, ContextValue>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_flag(&mut self, key: &str) {
        self.values.insert(key.to_string(), ContextValue::Flag(true));
    }

    pub fn set_count(&mut self, key: &str, count: u32) {
        self.values.insert(key.to_string(), ContextValue::Count(count));
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(ContextValue::Flag(true)))
    }

    pub fn count(&self, key: &str) -> u32 {
        match self.values.get(key) {
            Some(ContextValue::Count(n)) => *n,
            _ => 0,
        }
    }
}

/// Pure predicate over the context, expressed as data rather than as an
/// embedded closure.
#[derive(Debug, Clone)]
pub enum Validator {
    FlagSet(&'static str),
    CountAtLeast(&'static str, u32),
}

impl Validator {
    pub fn accepts(&self, context: &Context) -> bool {
        match self {
            Validator::FlagSet(key) => context.flag(key),
            Validator::CountAtLeast(key, minimum) => context.count(key) >= *minimum,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub hints: Vec<Hint>,
    pub validator: Validator,
    pub difficulty: u32,
    pub status: PuzzleStatus,
    pub hints_used: u32,
    pub score: u32,
    pub completion_time: u64,
}

impl Puzzle {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        objectives: &[&str],
        hints: &[&str],
        validator: Validator,
        difficulty: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            objectives: objectives.iter().map(|s| s.to_string()).collect(),
            hints: hints
                .iter()
                .map(|text| Hint {
                    text: text.to_string(),
                    revealed: false,
                })
                .collect(),
            validator,
            difficulty,
            status: PuzzleStatus::Available,
            hints_used: 0,
            score: 0,
            completion_time: 0,
        }
    }

    pub fn validate(&self, context: &Context) -> bool {
        self.validator.accepts(context)
    }

    pub fn revealed_hints(&self) -> usize {
        self.hints.iter().filter(|h| h.revealed).count()
    }

    /// Reveal the hint at `index`. Reveals are permanent and each one
    /// increments `hints_used`.
    pub fn reveal_hint(&mut self, index: usize) -> Option<&str> {
        let hint = self.hints.get_mut(index)?;
        hint.revealed = true;
        self.hints_used += 1;
        Some(&hint.text)
    }

    /// Mark completed and compute the score from the elapsed session time.
    pub fn complete(&mut self, elapsed_seconds: u64) -> u32 {
        self.status = PuzzleStatus::Completed;
        self.completion_time = elapsed_seconds;
        self.score = (self.difficulty * 100)
            .saturating_sub(self.hints_used * 10)
            .saturating_sub((elapsed_seconds / 10) as u32);
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Puzzle {
        Puzzle::new(
            "sample",
            "Sample",
            "A sample puzzle.",
            &["do the thing"],
            &["first", "second", "third"],
            Validator::FlagSet(FOUND_PASSWORD),
            1,
        )
    }

    #[test]
    fn validator_flag() {
        let puzzle = sample();
        let mut context = Context::new();
        assert!(!puzzle.validate(&context));
        context.set_flag(FOUND_PASSWORD);
        assert!(puzzle.validate(&context));
    }

    #[test]
    fn validator_count() {
        let validator = Validator::CountAtLeast(CONFIG_FILES_FOUND, 2);
        let mut context = Context::new();
        assert!(!validator.accepts(&context));
        context.set_count(CONFIG_FILES_FOUND, 1);
        assert!(!validator.accepts(&context));
        context.set_count(CONFIG_FILES_FOUND, 2);
        assert!(validator.accepts(&context));
    }

    #[test]
    fn hint_reveals_are_permanent_and_counted() {
        let mut puzzle = sample();
        assert_eq!(puzzle.reveal_hint(0), Some("first"));
        assert_eq!(puzzle.reveal_hint(1), Some("second"));
        assert_eq!(puzzle.reveal_hint(2), Some("third"));
        assert_eq!(puzzle.reveal_hint(3), None);
        assert_eq!(puzzle.hints_used, 3);
        assert_eq!(puzzle.revealed_hints(), 3);
    }

    #[test]
    fn scoring_formula() {
        let mut puzzle = sample();
        puzzle.hints_used = 2;
        assert_eq!(puzzle.complete(35), 100 - 20 - 3);
        assert_eq!(puzzle.status, PuzzleStatus::Completed);
        assert_eq!(puzzle.completion_time, 35);
    }

    #[test]
    fn score_floors_at_zero() {
        let mut puzzle = sample();
        assert_eq!(puzzle.complete(100_000), 0);
    }
}
