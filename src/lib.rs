//! hacksim - the engine of a terminal hacking game
//!
//! A simulated POSIX-like filesystem, a Unix command interpreter, and a
//! puzzle engine that watches command activity. The interactive front-end
//! (readline, colors, dialogue mini-games) lives outside this crate and
//! only calls into [`Session`].

pub mod commands;
pub mod fs;
pub mod puzzles;
pub mod session;

pub use commands::{CommandResult, Interpreter};
pub use fs::{Filesystem, FsError, Node};
pub use puzzles::{PuzzleEngine, PuzzleStatus};
pub use session::Session;
