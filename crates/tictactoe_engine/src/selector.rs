//! Heuristic move selection for the computer player.
//!
//! The selector looks one ply ahead and no further. It walks a fixed
//! priority cascade and plays the first open cell of the first line that
//! matches:
//!
//! 1. complete its own two-of-three line,
//! 2. block the opponent's two-of-three line,
//! 3. extend its own one-of-three line,
//! 4. contest the opponent's one-of-three line,
//! 5. fall back to center, corners, then edges.
//!
//! An opponent who sets up two threats at once (a fork) beats it: only the
//! first threat in line order gets blocked.

use crate::{Board, FatalLogicError, Token, WinLine};
use derive_more::Display;
use serde::Serialize;
use tracing::{debug, instrument};

/// Fallback preference: center, corners, then edges.
const FALLBACK_ORDER: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Which rule of the cascade produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Reason {
    /// Completes a line the computer already holds two cells of.
    #[display("complete {}", _0)]
    Complete(WinLine),
    /// Blocks a line the opponent holds two cells of.
    #[display("block {}", _0)]
    Block(WinLine),
    /// Adds to a line the computer holds one cell of.
    #[display("build {}", _0)]
    Build(WinLine),
    /// Takes a cell on a line the opponent holds one cell of.
    #[display("contest {}", _0)]
    Contest(WinLine),
    /// No line matched; fixed preference order.
    #[display("fallback")]
    Fallback,
}

/// A selected move and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[display("{} ({})", index, reason)]
pub struct Choice {
    /// Cell to play.
    pub index: usize,
    /// Why this cell was picked.
    pub reason: Reason,
}

/// Picks the computer's next cell.
///
/// Holds nothing but the two tokens, so the same board always yields the
/// same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector {
    token: Token,
    opponent: Token,
}

impl MoveSelector {
    /// Creates a selector playing `token` against its opponent.
    pub fn new(token: Token) -> Self {
        Self::with_opponent(token, token.opponent())
    }

    /// Creates a selector with both tokens given explicitly.
    pub fn with_opponent(token: Token, opponent: Token) -> Self {
        Self { token, opponent }
    }

    /// Returns the token this selector plays.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Returns the opponent's token.
    pub fn opponent(&self) -> Token {
        self.opponent
    }

    /// Returns the index of the cell to play next.
    ///
    /// # Errors
    ///
    /// Returns [`FatalLogicError`] if the board has no open cell. Callers
    /// must detect the end of the game before asking for a move.
    pub fn select(&self, board: &Board) -> Result<usize, FatalLogicError> {
        self.decide(board).map(|choice| choice.index)
    }

    /// Like [`select`](Self::select), but also reports which rule fired.
    #[instrument(skip(self, board), fields(token = %self.token))]
    pub fn decide(&self, board: &Board) -> Result<Choice, FatalLogicError> {
        let cascade: [(Token, usize, fn(WinLine) -> Reason); 4] = [
            (self.token, 2, Reason::Complete),
            (self.opponent, 2, Reason::Block),
            (self.token, 1, Reason::Build),
            (self.opponent, 1, Reason::Contest),
        ];

        for (token, count, reason) in cascade {
            if let Some(line) = board.find_potential(token, count)
                && let Some(index) = board.first_open(Some(line))
            {
                let choice = Choice {
                    index,
                    reason: reason(line),
                };
                debug!(%choice, "move selected");
                return Ok(choice);
            }
        }

        let index = FALLBACK_ORDER
            .into_iter()
            .find(|&index| board.is_open(index))
            .ok_or_else(|| {
                FatalLogicError::new(format!("could not find an open cell for {}", self.token))
            })?;
        let choice = Choice {
            index,
            reason: Reason::Fallback,
        };
        debug!(%choice, "move selected");
        Ok(choice)
    }
}
