//! Diagnostic logging for gc-orders.
//!
//! Events go to stderr so stdout only carries command results.

use anyhow::Context;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::shared::Result;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Picks the filter directive: `-v` forces debug, otherwise the configured
/// level, otherwise the default.
pub fn filter_directive(configured: Option<&str>, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    configured
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level unless `-v` was given. Calling
/// this twice is harmless; the first subscriber stays installed.
pub fn init_logging(configured: Option<&str>, verbose: bool) -> Result<()> {
    let directive = filter_directive(configured, verbose);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if !verbose => filter,
        _ => EnvFilter::try_new(&directive)
            .with_context(|| format!("Invalid log level '{}'", directive))?,
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init();

    Ok(())
}
