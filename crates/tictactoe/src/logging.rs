//! Debug trace setup.
//!
//! The trace goes to stderr so it never mixes with the board on stdout.
//! Its filter sits behind a reload handle so the `d` command can switch it
//! on and off mid-game.

use crate::settings::Settings;
use anyhow::{Context, Result};
use tracing::{info, instrument};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Runtime switch for the debug trace.
#[derive(Debug)]
pub struct TraceToggle {
    handle: Option<reload::Handle<EnvFilter, Registry>>,
    directives: String,
    enabled: bool,
}

impl TraceToggle {
    /// Creates a toggle that is not wired to any subscriber.
    ///
    /// It still tracks the on/off state, which is all the console needs in
    /// tests.
    pub fn detached(enabled: bool) -> Self {
        Self {
            handle: None,
            directives: String::new(),
            enabled,
        }
    }

    /// Checks if the trace is currently on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips the trace on or off and returns the new state.
    #[instrument(skip(self), fields(enabled = self.enabled))]
    pub fn toggle(&mut self) -> Result<bool> {
        let enabled = !self.enabled;
        if !enabled {
            info!("Disabling trace");
        }
        if let Some(handle) = &self.handle {
            handle
                .reload(filter_for(enabled, &self.directives)?)
                .context("Failed to reload trace filter")?;
        }
        self.enabled = enabled;
        if enabled {
            info!("Enabled trace");
        }
        Ok(enabled)
    }
}

/// Installs the global subscriber and returns its toggle.
///
/// `RUST_LOG` takes precedence over the configured trace filter.
pub fn init_tracing(settings: &Settings) -> Result<TraceToggle> {
    let directives =
        std::env::var("RUST_LOG").unwrap_or_else(|_| settings.trace_filter().clone());
    let enabled = *settings.debug();

    let (filter, handle) = reload::Layer::new(filter_for(enabled, &directives)?);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    info!(%directives, "Tracing initialized");
    Ok(TraceToggle {
        handle: Some(handle),
        directives,
        enabled,
    })
}

fn filter_for(enabled: bool, directives: &str) -> Result<EnvFilter> {
    if enabled {
        EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid trace filter: {}", directives))
    } else {
        Ok(EnvFilter::new("off"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_toggle_flips_state() {
        let mut toggle = TraceToggle::detached(false);
        assert!(toggle.toggle().unwrap());
        assert!(toggle.is_enabled());
        assert!(!toggle.toggle().unwrap());
    }

    #[test]
    fn test_invalid_directives_are_reported() {
        assert!(filter_for(true, "tictactoe=loud").is_err());
        assert!(filter_for(false, "tictactoe=loud").is_ok());
    }
}
