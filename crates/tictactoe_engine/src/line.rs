//! The eight winning lines of a 3x3 board.
//!
//! A [`WinLine`] is only a triple of cell indices. It never holds cell
//! values, so every query reads the board it is handed and always sees the
//! current state.

use crate::{Board, Cell, Token};
use serde::Serialize;

/// Three cell indices that win when held by one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// All lines in evaluation order: rows, columns, then diagonals.
    ///
    /// Every "first line" query walks this array front to back, so the
    /// order decides which line wins a tie.
    pub const ALL: [WinLine; 8] = [
        // Rows
        WinLine([0, 1, 2]),
        WinLine([3, 4, 5]),
        WinLine([6, 7, 8]),
        // Columns
        WinLine([0, 3, 6]),
        WinLine([1, 4, 7]),
        WinLine([2, 5, 8]),
        // Diagonals
        WinLine([0, 4, 8]),
        WinLine([2, 4, 6]),
    ];

    /// Returns the cell indices of this line, lowest first.
    pub fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Checks if the line passes through `index`.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Reads the three cells of this line from `board`.
    pub fn cells(self, board: &Board) -> [Cell; 3] {
        self.0.map(|index| board.cells()[index])
    }

    /// Checks if `token` holds all three cells.
    pub fn is_win(self, board: &Board, token: Token) -> bool {
        self.cells(board)
            .iter()
            .all(|cell| *cell == Cell::Occupied(token))
    }

    /// Checks if `token` holds exactly `count` cells and the rest are open.
    pub fn is_potential_win(self, board: &Board, token: Token, count: usize) -> bool {
        let mut held = 0;
        for cell in self.cells(board) {
            match cell {
                Cell::Occupied(t) if t == token => held += 1,
                Cell::Occupied(_) => return false,
                Cell::Empty => {}
            }
        }
        held == count
    }

    /// Returns the lowest open index on this line.
    pub fn first_open(self, board: &Board) -> Option<usize> {
        self.0.into_iter().find(|&index| board.is_open(index))
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{{{}, {}, {}}}", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_is_covered() {
        for index in 0..9 {
            assert!(WinLine::ALL.iter().any(|line| line.contains(index)));
        }
        // Center sits on four lines, corners on three, edges on two.
        let through = |index| WinLine::ALL.iter().filter(|l| l.contains(index)).count();
        assert_eq!(through(4), 4);
        assert_eq!(through(0), 3);
        assert_eq!(through(1), 2);
    }

    #[test]
    fn test_blocked_line_is_not_potential() {
        let mut board = Board::new();
        board.play(Token::X, 0).unwrap();
        board.play(Token::O, 2).unwrap();
        let top = WinLine::ALL[0];
        assert!(!top.is_potential_win(&board, Token::X, 1));
        assert!(!top.is_potential_win(&board, Token::O, 1));
    }

    #[test]
    fn test_first_open_skips_taken_cells() {
        let mut board = Board::new();
        board.play(Token::X, 0).unwrap();
        assert_eq!(WinLine::ALL[0].first_open(&board), Some(1));
        board.play(Token::O, 1).unwrap();
        assert_eq!(WinLine::ALL[0].first_open(&board), Some(2));
        board.play(Token::X, 2).unwrap();
        assert_eq!(WinLine::ALL[0].first_open(&board), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(WinLine::ALL[7].to_string(), "{2, 4, 6}");
    }
}
