//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
///
/// `O` always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Token {
    /// Token O (moves first).
    #[serde(alias = "o")]
    O,
    /// Token X.
    #[serde(alias = "x")]
    X,
}

impl Token {
    /// The token that opens every game.
    pub const FIRST: Token = Token::O;

    /// Returns the other token.
    pub fn opponent(self) -> Self {
        match self {
            Token::O => Token::X,
            Token::X => Token::O,
        }
    }

    /// Reads a token from the first character of `s`, ignoring case.
    ///
    /// `"x"`, `"X"` and `"xray"` all give [`Token::X`].
    pub fn from_initial(s: &str) -> Option<Self> {
        match s.trim_start().chars().next()?.to_ascii_uppercase() {
            'O' => Some(Token::O),
            'X' => Some(Token::X),
            _ => None,
        }
    }
}

/// A single slot on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Taken by a token. Never reverts to `Empty`.
    Occupied(Token),
}

impl Cell {
    /// Checks if the cell is still open.
    pub fn is_open(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the token holding this cell, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(token) => Some(token),
        }
    }
}
