//! The 3x3 board and its queries.

use crate::{Cell, InvalidMove, Token, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major: 0-2 top row, 3-5 middle, 6-8 bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board from a snapshot of its cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`, or `None` past the edge.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Checks if `index` is on the board and still open.
    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// Checks if every cell is taken.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_open())
    }

    /// Iterates over the open indices, lowest first.
    pub fn open_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(|&index| self.is_open(index))
    }

    /// Places `token` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfBounds`] past the edge and
    /// [`InvalidMove::Occupied`] for a taken cell. The board is unchanged
    /// on error.
    #[instrument(level = "trace", skip(self))]
    pub fn play(&mut self, token: Token, index: usize) -> Result<(), InvalidMove> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(InvalidMove::OutOfBounds(index))?;
        if !cell.is_open() {
            return Err(InvalidMove::Occupied(index));
        }
        *cell = Cell::Occupied(token);
        Ok(())
    }

    /// Returns the first line fully held by `token`.
    #[instrument(level = "trace", skip(self))]
    pub fn find_win(&self, token: Token) -> Option<WinLine> {
        let found = WinLine::ALL
            .into_iter()
            .find(|line| line.is_win(self, token));
        trace!(?found, "win lookup");
        found
    }

    /// Returns the first line where `token` holds exactly `count` cells and
    /// the opponent holds none.
    #[instrument(level = "trace", skip(self))]
    pub fn find_potential(&self, token: Token, count: usize) -> Option<WinLine> {
        let found = WinLine::ALL
            .into_iter()
            .find(|line| line.is_potential_win(self, token, count));
        trace!(?found, "potential win lookup");
        found
    }

    /// Returns the lowest open index, within `within` if given, otherwise
    /// anywhere on the board.
    pub fn first_open(&self, within: Option<WinLine>) -> Option<usize> {
        match within {
            Some(line) => line.first_open(self),
            None => self.open_cells().next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_open()));
        assert_eq!(board.open_cells().count(), 9);
        assert_eq!(board.first_open(None), Some(0));
    }

    #[test]
    fn test_play_occupies_cell() {
        let mut board = Board::new();
        board.play(Token::X, 4).unwrap();
        assert_eq!(board.cell(4), Some(Cell::Occupied(Token::X)));
        assert_eq!(board.open_cells().count(), 8);
    }

    #[test]
    fn test_play_rejects_occupied() {
        let mut board = Board::new();
        board.play(Token::X, 4).unwrap();
        let before = board.clone();
        assert_eq!(board.play(Token::O, 4), Err(InvalidMove::Occupied(4)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.play(Token::O, 9), Err(InvalidMove::OutOfBounds(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_find_win_column() {
        let mut board = Board::new();
        for index in [1, 4, 7] {
            board.play(Token::O, index).unwrap();
        }
        assert_eq!(board.find_win(Token::O), Some(WinLine::ALL[4]));
        assert_eq!(board.find_win(Token::X), None);
    }

    #[test]
    fn test_find_potential_counts_exactly() {
        let mut board = Board::new();
        board.play(Token::X, 0).unwrap();
        board.play(Token::X, 1).unwrap();
        // Top row has two, so it is not a one-of-three line.
        assert_eq!(board.find_potential(Token::X, 2), Some(WinLine::ALL[0]));
        assert_eq!(board.find_potential(Token::X, 1), Some(WinLine::ALL[3]));
    }

    #[test]
    fn test_first_open_within_line() {
        let mut board = Board::new();
        board.play(Token::O, 2).unwrap();
        board.play(Token::X, 4).unwrap();
        assert_eq!(board.first_open(Some(WinLine::ALL[7])), Some(6));
        assert_eq!(board.first_open(None), Some(0));
    }
}
