use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use serde::Serialize;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing command results to stdout
///
/// Diagnostics go to stderr through `tracing`; stdout only ever carries the
/// JSON result so it can be piped into other tools.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

/// Renders a response as pretty-printed JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("Failed to serialize output: {}", e))
}
