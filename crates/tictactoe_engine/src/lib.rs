//! Tic-tac-toe engine - board model and heuristic computer player.
//!
//! # Architecture
//!
//! - **Board**: nine cells plus the eight fixed [`WinLine`]s, with win and
//!   near-win queries
//! - **MoveSelector**: the computer's one-ply priority cascade
//! - **Game**: turn alternation and win/draw detection on top of a board
//!
//! The engine does no I/O. It emits `tracing` spans and events, which stay
//! silent until the host installs a subscriber.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Seats, Token};
//!
//! let mut game = Game::new(Seats::new(Token::X));
//! // O moves first, and the computer holds O.
//! let choice = game.computer_move()?;
//! assert_eq!(choice.index, 4);
//! game.play(Token::X, 0)?;
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod line;
mod selector;
mod types;

pub use board::{Board, CELL_COUNT};
pub use error::{FatalLogicError, GameError, InvalidMove};
pub use game::{Game, Outcome, Seats};
pub use line::WinLine;
pub use selector::{Choice, MoveSelector, Reason};
pub use types::{Cell, Token};
