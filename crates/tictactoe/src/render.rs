//! Plain-text board rendering and end-of-game messages.

use tictactoe_engine::{Board, Cell, Outcome, Seats};

/// Command summary shown by `h`.
pub const HELP: &str = "\
0 - 8: to select a square
p:     to draw the current board
d:     to toggle debug trace
h:     to display help
q:     to end game";

const PADDING: &str = "     |     |";
const DIVIDER: &str = "=====+=====+=====";

/// Renders the board as three five-character-wide columns.
///
/// With `prompt` set, open cells show their index so the player knows what
/// to type.
pub fn render_board(board: &Board, prompt: bool) -> String {
    let mut out = String::new();
    for (row, cells) in board.cells().chunks(3).enumerate() {
        out.push_str(PADDING);
        out.push('\n');

        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| match cell {
                Cell::Occupied(token) => format!("  {}  ", token),
                Cell::Empty if prompt => format!(" [{}] ", row * 3 + col),
                Cell::Empty => "     ".to_string(),
            })
            .collect();
        out.push_str(&line.join("|"));
        out.push('\n');

        out.push_str(PADDING);
        out.push('\n');
        if row < 2 {
            out.push_str(DIVIDER);
            out.push('\n');
        }
    }
    out
}

/// The line announced when a game ends, from the human's point of view.
pub fn announcement(outcome: Outcome, seats: Seats) -> &'static str {
    match outcome.winner() {
        Some(token) if token == seats.human() => "You win! hooray!",
        Some(_) => "I win! Yay me!",
        None => "Ugh! Stalemate.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Token, WinLine};

    #[test]
    fn test_prompt_shows_open_indices() {
        let mut board = Board::new();
        board.play(Token::X, 4).unwrap();
        let text = render_board(&board, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], " [0] | [1] | [2] ");
        assert_eq!(lines[5], " [3] |  X  | [5] ");
        assert_eq!(lines[3], DIVIDER);
    }

    #[test]
    fn test_plain_hides_open_indices() {
        let mut board = Board::new();
        board.play(Token::O, 0).unwrap();
        let text = render_board(&board, false);
        assert_eq!(text.lines().nth(1), Some("  O  |     |     "));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_announcements() {
        let seats = Seats::new(Token::X);
        let won = |token| Outcome::Won {
            token,
            line: WinLine::ALL[0],
        };
        assert_eq!(announcement(won(Token::X), seats), "You win! hooray!");
        assert_eq!(announcement(won(Token::O), seats), "I win! Yay me!");
        assert_eq!(announcement(Outcome::Draw, seats), "Ugh! Stalemate.");
    }
}
