//! Tictactoe - play against the computer in a terminal
//!
//! # Architecture
//!
//! - **Cli / Settings**: command-line flags layered over an optional TOML file
//! - **Logging**: the debug trace on stderr, switchable at runtime
//! - **Console**: the prompt loop, generic over its input and output
//! - **Render**: the ASCII board and end-of-game messages
//!
//! Game rules and the computer player live in [`tictactoe_engine`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{Console, TraceToggle};
//! use tictactoe_engine::{Seats, Token};
//!
//! let input: &[u8] = b"q\n";
//! let mut console = Console::new(input, Vec::new(), TraceToggle::detached(false));
//! let outcome = console.run(Seats::new(Token::O))?;
//! assert!(outcome.is_none());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod logging;
mod render;
mod settings;

pub use cli::Cli;
pub use console::{Command, Console, UnknownCommand};
pub use logging::{TraceToggle, init_tracing};
pub use render::{HELP, announcement, render_board};
pub use settings::{ConfigError, DEFAULT_TRACE_FILTER, Settings};
