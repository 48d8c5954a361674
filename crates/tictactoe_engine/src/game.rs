//! Turn order and terminal-state tracking over a [`Board`].

use crate::{Board, Choice, GameError, MoveSelector, Token, WinLine};
use serde::Serialize;
use tracing::{info, instrument};

/// Token assignment for one game.
///
/// Fixed before the board exists and never changes during the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Seats {
    human: Token,
    computer: Token,
}

impl Seats {
    /// Seats the human at `human` and the computer at the other token.
    pub fn new(human: Token) -> Self {
        Self {
            human,
            computer: human.opponent(),
        }
    }

    /// Returns the human's token.
    pub fn human(&self) -> Token {
        self.human
    }

    /// Returns the computer's token.
    pub fn computer(&self) -> Token {
        self.computer
    }

    /// Checks if the computer makes the opening move.
    pub fn computer_first(&self) -> bool {
        self.computer == Token::FIRST
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// `token` holds every cell of `line`.
    Won {
        /// The winning token.
        token: Token,
        /// The completed line.
        line: WinLine,
    },
    /// Board full, no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Token> {
        match self {
            Outcome::Won { token, .. } => Some(*token),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { token, line } => write!(f, "{} wins on {}", token, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One human-versus-computer game.
///
/// Moves strictly alternate starting with [`Token::FIRST`], and nothing is
/// accepted once an [`Outcome`] has been reached.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    seats: Seats,
    selector: MoveSelector,
    to_move: Token,
    outcome: Option<Outcome>,
    history: Vec<usize>,
}

impl Game {
    /// Starts a new game on an empty board.
    #[instrument]
    pub fn new(seats: Seats) -> Self {
        Self {
            board: Board::new(),
            selector: MoveSelector::with_opponent(seats.computer(), seats.human()),
            seats,
            to_move: Token::FIRST,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the token assignment.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Returns the token to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Token> {
        match self.outcome {
            Some(_) => None,
            None => Some(self.to_move),
        }
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the cells played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Plays `token` at `index`.
    ///
    /// Returns the outcome if this move ended the game.
    ///
    /// # Errors
    ///
    /// Fails with [`GameError::GameOver`] after the game has ended,
    /// [`GameError::NotYourTurn`] if `token` is not to move, and
    /// [`GameError::InvalidMove`] if the board rejects the cell. The game is
    /// unchanged on error.
    #[instrument(skip(self), fields(history = ?self.history))]
    pub fn play(&mut self, token: Token, index: usize) -> Result<Option<Outcome>, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if token != self.to_move {
            return Err(GameError::NotYourTurn(token));
        }

        self.board.play(token, index)?;
        self.history.push(index);

        self.outcome = self.evaluate(token);
        match self.outcome {
            Some(outcome) => info!(%outcome, "Game over"),
            None => self.to_move = token.opponent(),
        }
        Ok(self.outcome)
    }

    /// Lets the computer pick and play its move.
    ///
    /// # Errors
    ///
    /// Same as [`play`](Self::play) for the computer's token, plus
    /// [`GameError::Fatal`] if the selector finds no open cell.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Choice, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        let choice = self.selector.decide(&self.board)?;
        self.play(self.seats.computer(), choice.index)?;
        Ok(choice)
    }

    /// Checks whether the last move by `mover` ended the game.
    fn evaluate(&self, mover: Token) -> Option<Outcome> {
        if let Some(line) = self.board.find_win(mover) {
            return Some(Outcome::Won { token: mover, line });
        }
        if self.board.first_open(None).is_none() {
            return Some(Outcome::Draw);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seats() {
        let seats = Seats::new(Token::X);
        assert_eq!(seats.computer(), Token::O);
        assert!(seats.computer_first());
        assert!(!Seats::new(Token::O).computer_first());
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(Seats::new(Token::O));
        assert_eq!(game.to_move(), Some(Token::O));
        assert!(game.history().is_empty());
        assert!(!game.is_over());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Seats::new(Token::O));
        game.play(Token::O, 0).unwrap();
        assert_eq!(game.to_move(), Some(Token::X));
        assert_eq!(game.play(Token::O, 1), Err(GameError::NotYourTurn(Token::O)));
        game.play(Token::X, 1).unwrap();
        assert_eq!(game.history(), &[0, 1]);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(Seats::new(Token::O));
        game.play(Token::O, 4).unwrap();
        let err = game.play(Token::X, 4).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove(_)));
        assert_eq!(game.to_move(), Some(Token::X));
        assert_eq!(game.history(), &[4]);
    }

    #[test]
    fn test_computer_opens_in_center() {
        let mut game = Game::new(Seats::new(Token::X));
        let choice = game.computer_move().unwrap();
        assert_eq!(choice.index, 4);
        assert_eq!(game.to_move(), Some(Token::X));
    }

    #[test]
    fn test_outcome_display() {
        let won = Outcome::Won {
            token: Token::X,
            line: WinLine::ALL[6],
        };
        assert_eq!(won.to_string(), "X wins on {0, 4, 8}");
        assert_eq!(won.winner(), Some(Token::X));
        assert!(Outcome::Draw.is_draw());
    }
}
