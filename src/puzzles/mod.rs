//! Puzzle System
//!
//! Challenges, hints, scoring, and the context of derived flags that
//! validators consume. The engine never looks at the filesystem directly;
//! it only sees the context the session distills from command activity.

pub mod engine;
pub mod types;

pub use engine::{Progress, PuzzleEngine};
pub use types::{
    Context, ContextValue, Hint, Puzzle, PuzzleError, PuzzleStatus, Validator,
};
