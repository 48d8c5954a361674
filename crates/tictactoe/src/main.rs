//! Tictactoe - terminal game against the computer.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe::{Cli, Console, Settings, init_tracing};
use tictactoe_engine::Seats;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?.with_cli(&cli);
    let trace = init_tracing(&settings)?;

    let seats = Seats::new(*settings.token());
    info!(human = %seats.human(), "Starting tictactoe");

    let mut console = Console::new(io::stdin().lock(), io::stdout(), trace);
    console.run(seats)?;
    Ok(())
}
