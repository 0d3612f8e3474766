//! Wayland clipboard bridge: `wl-copy` / `wl-paste` from wl-clipboard.

use bytes::Bytes;

use super::{ClipboardBridge, ResolverError, chooser, command};

const WL_COPY: &str = "wl-copy";
const WL_PASTE: &str = "wl-paste";
const TYPE_ARGS: [&str; 2] = ["--type", "image/png"];

/// Wayland implementation of `ClipboardBridge`.
pub struct WaylandBridge;

impl WaylandBridge {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardBridge for WaylandBridge {
    fn seed_from_picker(&self, prompt: &str) -> Result<(), ResolverError> {
        let file = chooser::choose_png(prompt)?;
        let content = std::fs::read(&file)?;
        tracing::debug!(
            file = %file.display(),
            bytes = content.len(),
            "seeding Wayland clipboard"
        );
        command::status(WL_COPY, &TYPE_ARGS, Some(&content))
    }

    fn read_png(&self) -> Result<Bytes, ResolverError> {
        // --no-newline keeps wl-paste from appending to binary data.
        let stdout = command::capture(WL_PASTE, &[TYPE_ARGS[0], TYPE_ARGS[1], "--no-newline"])?;
        if stdout.is_empty() {
            return Err(ResolverError::Decode("clipboard is empty".into()));
        }
        Ok(Bytes::from(stdout))
    }
}
