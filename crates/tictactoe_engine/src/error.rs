//! Error types for the engine.
//!
//! Rejected input and broken caller invariants are kept apart: an
//! [`InvalidMove`] is recoverable and leaves the board untouched, while a
//! [`FatalLogicError`] means the caller asked for a move on a finished board.

use crate::Token;
use derive_more::{Display, Error, From};

/// A move the board refused to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// Index outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a token.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for InvalidMove {}

/// The move selector found no open cell to play.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Fatal logic error: {} at {}:{}", message, file, line)]
pub struct FatalLogicError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl FatalLogicError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Errors raised by [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum GameError {
    /// A win or draw has already been reached.
    #[display("Game is already over")]
    #[from(skip)]
    GameOver,

    /// The given token is not the one to move.
    #[display("It's not {}'s turn", _0)]
    #[from(skip)]
    NotYourTurn(Token),

    /// The board rejected the move.
    #[display("{}", _0)]
    InvalidMove(InvalidMove),

    /// The move selector broke its contract.
    #[display("{}", _0)]
    Fatal(FatalLogicError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMove(e) => Some(e),
            GameError::Fatal(e) => Some(e),
            GameError::GameOver | GameError::NotYourTurn(_) => None,
        }
    }
}
