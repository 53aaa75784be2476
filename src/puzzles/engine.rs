//! Puzzle Engine
//!
//! Owns the fixed puzzle catalog in creation order, the "current" puzzle
//! pointer, and cumulative scoring.

use indexmap::IndexMap;

use super::types::{
    Context, Puzzle, PuzzleError, PuzzleStatus, Validator, BACKDOOR_CREATED,
    CONFIG_FILES_FOUND, DECODED, FOUND_PASSWORD, PERMS_CHANGED, READ_SHADOW,
};

/// Game progress snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub score: u32,
    pub percentage: f64,
}

pub struct PuzzleEngine {
    puzzles: IndexMap<String, Puzzle>,
    current: Option<String>,
    completed: Vec<String>,
    total_score: u32,
}

impl PuzzleEngine {
    /// Build the engine with the fixed six-puzzle catalog.
    pub fn new() -> Self {
        let mut puzzles = IndexMap::new();
        for puzzle in catalog() {
            puzzles.insert(puzzle.id.clone(), puzzle);
        }
        Self {
            puzzles,
            current: None,
            completed: Vec::new(),
            total_score: 0,
        }
    }

    pub fn puzzle(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.get(id)
    }

    /// All puzzles in creation order.
    pub fn puzzles(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.values()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Activate a puzzle by id. Rejected if unknown or already completed.
    /// Activating while another puzzle is in progress simply overwrites the
    /// current pointer; the previous puzzle stays IN_PROGRESS.
    pub fn start_puzzle(&mut self, id: &str) -> Result<&Puzzle, PuzzleError> {
        match self.puzzles.get_mut(id) {
            Some(puzzle) if puzzle.status != PuzzleStatus::Completed => {
                puzzle.status = PuzzleStatus::InProgress;
                self.current = Some(id.to_string());
                Ok(&self.puzzles[id])
            }
            _ => Err(PuzzleError::NotAvailable(id.to_string())),
        }
    }

    /// Reveal the next hint of the current puzzle, in fixed order.
    pub fn next_hint(&mut self) -> Result<String, PuzzleError> {
        let id = self.current.clone().ok_or(PuzzleError::NoActivePuzzle)?;
        let puzzle = self
            .puzzles
            .get_mut(&id)
            .ok_or(PuzzleError::NoActivePuzzle)?;
        let index = puzzle.revealed_hints();
        puzzle
            .reveal_hint(index)
            .map(str::to_string)
            .ok_or(PuzzleError::NoMoreHints)
    }

    /// Evaluate the current puzzle's validator against the context. On
    /// acceptance the puzzle is completed and scored, the current pointer is
    /// cleared, and (title, score) is returned.
    pub fn check_current(&mut self, context: &Context, elapsed_seconds: u64) -> Option<(String, u32)> {
        let id = self.current.clone()?;
        let puzzle = self.puzzles.get_mut(&id)?;
        if !puzzle.validate(context) {
            return None;
        }
        let score = puzzle.complete(elapsed_seconds);
        let title = puzzle.title.clone();
        self.total_score += score;
        self.completed.push(id);
        self.current = None;
        Some((title, score))
    }

    pub fn progress(&self) -> Progress {
        let completed = self.completed.len();
        let total = self.puzzles.len();
        Progress {
            completed,
            total,
            score: self.total_score,
            percentage: completed as f64 / total as f64 * 100.0,
        }
    }

    /// Win condition: every registered puzzle completed.
    pub fn is_complete(&self) -> bool {
        self.completed.len() == self.puzzles.len()
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn catalog() -> Vec<Puzzle> {
    vec![
        Puzzle::new(
            "find_password",
            "Find the Hidden Password",
            "A password is hidden in one of the log files. Use grep to search for it.",
            &[
                "Look in the /tmp directory for log files",
                "Use grep with the pattern 'password' to find hints",
                "Check /tmp/log.txt",
            ],
            &[
                "Start by navigating to /tmp",
                "Use: grep 'password' /tmp/log.txt",
                "The password contains 'flag'",
            ],
            Validator::FlagSet(FOUND_PASSWORD),
            1,
        ),
        Puzzle::new(
            "read_protected",
            "Read Protected File",
            "The /etc/shadow file contains important information, but only root can read it. Use sudo to elevate privileges.",
            &[
                "Use sudo to run commands with root privileges",
                "Try: sudo cat /etc/shadow",
            ],
            &[
                "You need root privileges to read /etc/shadow",
                "Use the sudo command: sudo cat /etc/shadow",
                "This simulates privilege escalation",
            ],
            Validator::FlagSet(READ_SHADOW),
            2,
        ),
        Puzzle::new(
            "find_config",
            "Locate Configuration Files",
            "Find all configuration files (.conf or .config) on the system using the find command.",
            &[
                "Use find to search for files",
                "Search for files with specific patterns",
            ],
            &[
                "Use find from the root directory: find / -name '*.conf' -o -name '*.config'",
                "Look in /etc for configuration files",
            ],
            Validator::CountAtLeast(CONFIG_FILES_FOUND, 2),
            2,
        ),
        Puzzle::new(
            "permission_escalation",
            "Escalate File Permissions",
            "Change file permissions to make a read-only file writable, then modify its contents.",
            &[
                "Use chmod to change permissions",
                "Make a file writable",
            ],
            &[
                "chmod is the change mode command",
                "777 permissions mean full access",
                "Try: chmod 777 /home/player/secret.txt",
            ],
            Validator::FlagSet(PERMS_CHANGED),
            3,
        ),
        Puzzle::new(
            "decode_info",
            "Decode Hidden Information",
            "Use text processing commands to extract and decode information from files.",
            &[
                "Combine grep, cut, and other text tools",
                "Work with /etc/passwd to find user information",
            ],
            &[
                "Use grep to find user entries in /etc/passwd",
                "Use cut to extract specific fields",
                "Try: grep 'player' /etc/passwd | cut -d: -f1,3,6",
            ],
            Validator::FlagSet(DECODED),
            3,
        ),
        Puzzle::new(
            "create_backdoor",
            "Establish Persistence",
            "Create a backdoor by adding a new user account or creating executable in a startup location.",
            &[
                "Create a file in /tmp with executable permissions",
                "Use echo and chmod together",
            ],
            &[
                "Create a script: echo '#!/bin/bash' > /tmp/backdoor.sh",
                "Make it executable: chmod 755 /tmp/backdoor.sh",
                "This represents planting a backdoor",
            ],
            Validator::FlagSet(BACKDOOR_CREATED),
            4,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_and_size() {
        let engine = PuzzleEngine::new();
        let ids: Vec<&str> = engine.puzzles().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "find_password",
                "read_protected",
                "find_config",
                "permission_escalation",
                "decode_info",
                "create_backdoor",
            ]
        );
        assert!(engine.puzzles().all(|p| p.status == PuzzleStatus::Available));
    }

    #[test]
    fn activation() {
        let mut engine = PuzzleEngine::new();
        assert!(engine.start_puzzle("find_password").is_ok());
        assert_eq!(engine.current(), Some("find_password"));
        assert_eq!(
            engine.puzzle("find_password").unwrap().status,
            PuzzleStatus::InProgress
        );

        let err = engine.start_puzzle("no_such").unwrap_err();
        assert_eq!(err, PuzzleError::NotAvailable("no_such".to_string()));
    }

    #[test]
    fn activation_overwrites_current_and_strands_previous() {
        let mut engine = PuzzleEngine::new();
        engine.start_puzzle("find_password").unwrap();
        engine.start_puzzle("read_protected").unwrap();
        assert_eq!(engine.current(), Some("read_protected"));
        // the stranded puzzle stays InProgress with no way out
        assert_eq!(
            engine.puzzle("find_password").unwrap().status,
            PuzzleStatus::InProgress
        );
    }

    #[test]
    fn completed_puzzle_cannot_restart() {
        let mut engine = PuzzleEngine::new();
        engine.start_puzzle("find_password").unwrap();
        let mut context = Context::new();
        context.set_flag(FOUND_PASSWORD);
        let (title, score) = engine.check_current(&context, 0).unwrap();
        assert_eq!(title, "Find the Hidden Password");
        assert_eq!(score, 100);
        assert_eq!(engine.current(), None);

        let err = engine.start_puzzle("find_password").unwrap_err();
        assert_eq!(err, PuzzleError::NotAvailable("find_password".to_string()));
    }

    #[test]
    fn check_only_applies_to_current() {
        let mut engine = PuzzleEngine::new();
        let mut context = Context::new();
        context.set_flag(FOUND_PASSWORD);
        // nothing active: a satisfied validator changes nothing
        assert!(engine.check_current(&context, 0).is_none());

        engine.start_puzzle("read_protected").unwrap();
        // context satisfies find_password, not the current puzzle
        assert!(engine.check_current(&context, 0).is_none());
    }

    #[test]
    fn hints_in_order_then_exhausted() {
        let mut engine = PuzzleEngine::new();
        assert_eq!(engine.next_hint(), Err(PuzzleError::NoActivePuzzle));

        engine.start_puzzle("find_password").unwrap();
        assert_eq!(engine.next_hint().unwrap(), "Start by navigating to /tmp");
        assert_eq!(engine.next_hint().unwrap(), "Use: grep 'password' /tmp/log.txt");
        assert_eq!(engine.next_hint().unwrap(), "The password contains 'flag'");
        assert_eq!(engine.next_hint(), Err(PuzzleError::NoMoreHints));
        assert_eq!(engine.puzzle("find_password").unwrap().hints_used, 3);
    }

    #[test]
    fn hints_reduce_score() {
        let mut engine = PuzzleEngine::new();
        engine.start_puzzle("find_password").unwrap();
        engine.next_hint().unwrap();
        engine.next_hint().unwrap();
        let mut context = Context::new();
        context.set_flag(FOUND_PASSWORD);
        let (_, score) = engine.check_current(&context, 0).unwrap();
        assert_eq!(score, 80);
        assert_eq!(engine.total_score(), 80);
    }

    #[test]
    fn win_condition_needs_all_six() {
        let mut engine = PuzzleEngine::new();
        let mut context = Context::new();
        context.set_flag(FOUND_PASSWORD);
        context.set_flag(READ_SHADOW);
        context.set_count(CONFIG_FILES_FOUND, 2);
        context.set_flag(PERMS_CHANGED);
        context.set_flag(DECODED);
        context.set_flag(BACKDOOR_CREATED);

        let ids: Vec<String> = engine.puzzles().map(|p| p.id.clone()).collect();
        for (n, id) in ids.iter().enumerate() {
            assert!(!engine.is_complete());
            assert_eq!(engine.progress().completed, n);
            engine.start_puzzle(id).unwrap();
            assert!(engine.check_current(&context, 0).is_some());
        }
        assert!(engine.is_complete());
        assert_eq!(engine.progress().completed, 6);
        assert_eq!(engine.progress().total, 6);
        assert!((engine.progress().percentage - 100.0).abs() < f64::EPSILON);
        // 100 + 200 + 200 + 300 + 300 + 400 with no hints and zero elapsed
        assert_eq!(engine.total_score(), 1500);
    }
}
