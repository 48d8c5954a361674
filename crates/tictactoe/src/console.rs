//! Interactive prompt loop between the human and the computer.

use crate::logging::TraceToggle;
use crate::render::{HELP, announcement, render_board};
use anyhow::Result;
use derive_more::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_engine::{Board, Game, GameError, Outcome, Seats};
use tracing::{debug, info, instrument, warn};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the given cell.
    Move(usize),
    /// Redraw the board.
    Print,
    /// Show the command summary.
    Help,
    /// Switch the debug trace on or off.
    ToggleTrace,
    /// End the game.
    Quit,
}

/// Input that is neither a cell number nor a known command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invalid input: {:?}", _0)]
pub struct UnknownCommand(String);

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Ok(Command::Move(index));
        }
        match s.to_ascii_lowercase().as_str() {
            "p" => Ok(Command::Print),
            "h" => Ok(Command::Help),
            "d" => Ok(Command::ToggleTrace),
            "q" => Ok(Command::Quit),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

/// Runs games over any line-based input and text output.
pub struct Console<R, W> {
    input: R,
    output: W,
    trace: TraceToggle,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading moves from `input` and drawing to `output`.
    pub fn new(input: R, output: W, trace: TraceToggle) -> Self {
        Self {
            input,
            output,
            trace,
        }
    }

    /// Consumes the console and returns its output handle.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays one game to the end.
    ///
    /// Returns the outcome, or `None` if the player quit or input ran out.
    #[instrument(skip(self), fields(human = %seats.human(), computer = %seats.computer()))]
    pub fn run(&mut self, seats: Seats) -> Result<Option<Outcome>> {
        info!("Starting game");
        let mut game = Game::new(seats);

        if seats.computer_first() {
            self.computer_turn(&mut game)?;
        }

        loop {
            self.draw(game.board(), true)?;
            let Some(index) = self.prompt_move(game.board())? else {
                info!("Player quit");
                return Ok(None);
            };

            match game.play(seats.human(), index) {
                Ok(_) => {}
                Err(GameError::InvalidMove(e)) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            self.draw(game.board(), false)?;
            if let Some(outcome) = game.outcome() {
                return self.finish(outcome, seats);
            }

            self.computer_turn(&mut game)?;
            if let Some(outcome) = game.outcome() {
                self.draw(game.board(), false)?;
                return self.finish(outcome, seats);
            }
        }
    }

    fn computer_turn(&mut self, game: &mut Game) -> Result<()> {
        let choice = game.computer_move()?;
        debug!(%choice, "Computer moved");
        writeln!(self.output, "Computer plays {}", choice.index)?;
        Ok(())
    }

    /// Reads lines until the player picks a cell or quits.
    fn prompt_move(&mut self, board: &Board) -> Result<Option<usize>> {
        loop {
            writeln!(self.output, "move? >")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            debug!(input = line.trim_end(), "User input");

            match line.parse::<Command>() {
                Ok(Command::Move(index)) => return Ok(Some(index)),
                Ok(Command::Print) => self.draw(board, true)?,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::ToggleTrace) => {
                    let enabled = self.trace.toggle()?;
                    let state = if enabled { "on" } else { "off" };
                    writeln!(self.output, "Debug trace {}", state)?;
                }
                Ok(Command::Quit) => return Ok(None),
                Err(e) => {
                    debug!(error = %e, "Unrecognized input");
                    writeln!(self.output, "Invalid input")?;
                }
            }
        }
    }

    fn draw(&mut self, board: &Board, prompt: bool) -> Result<()> {
        write!(self.output, "{}", render_board(board, prompt))?;
        if !prompt {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome, seats: Seats) -> Result<Option<Outcome>> {
        info!(%outcome, "Game finished");
        writeln!(self.output, "{}", announcement(outcome, seats))?;
        Ok(Some(outcome))
    }
}
