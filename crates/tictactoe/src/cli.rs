//! Command-line interface for tictactoe.

use clap::Parser;
use tictactoe_engine::Token;

/// Play tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Token you will play, x or o (O goes first) [default: o]
    #[arg(short, long, value_parser = parse_token)]
    pub token: Option<Token>,

    /// Output detailed trace to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Path to the settings file (skipped if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,
}

/// Accepts any word starting with `o` or `x`.
fn parse_token(s: &str) -> Result<Token, String> {
    Token::from_initial(s).ok_or_else(|| format!("expected x or o, got {:?}", s))
}
