//! Clipboard image export.
//!
//! One attempt per run: seed the clipboard from the file chooser, read
//! the PNG bytes back, write them to the fixed destination. Every failure
//! is recovered here and turned into the manual-action fallback; nothing
//! escapes [`Exporter::export`].

pub mod destination;
pub mod format;
pub mod sink;

use std::io::{self, Write};
use std::path::PathBuf;

use crate::resolver::{ClipboardBridge, ResolverError};
use destination::Destination;
use sink::ImageSink;

/// Prompt shown in the file chooser.
pub const PROMPT: &str = "Select the Log Hours Interface image:";

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Export error type.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Resolver(#[from] ResolverError),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    /// True when a tool ran and exited non-zero. Those failures are only
    /// logged; stdout shows just the fallback.
    fn is_exit_status(&self) -> bool {
        matches!(self, ExportError::Resolver(ResolverError::Command { .. }))
    }
}

/// Terminal state of an export attempt.
#[derive(Debug)]
pub enum Outcome {
    /// The image was written.
    Saved,
    /// The user dismissed the chooser.
    Cancelled,
    Failed(ExportError),
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved)
    }
}

/// Copies the clipboard image to the destination.
pub struct Exporter<'a> {
    bridge: &'a dyn ClipboardBridge,
    sink: &'a dyn ImageSink,
    destination: Destination,
}

impl<'a> Exporter<'a> {
    pub fn new(
        bridge: &'a dyn ClipboardBridge,
        sink: &'a dyn ImageSink,
        destination: Destination,
    ) -> Self {
        Self {
            bridge,
            sink,
            destination,
        }
    }

    /// Run the export, printing status lines to stdout.
    pub fn export(&self) -> bool {
        self.export_to(&mut io::stdout().lock())
    }

    /// Run the export, printing status lines to `out`.
    pub fn export_to(&self, out: &mut impl Write) -> bool {
        let outcome = self.attempt();
        if let Err(e) = report(&outcome, out) {
            tracing::warn!(error = %e, "failed to print export status");
        }
        outcome.is_saved()
    }

    /// Perform both steps and classify the result.
    pub fn attempt(&self) -> Outcome {
        let path = self.destination.path();
        tracing::info!(path = %path.display(), "exporting clipboard image");

        match self.capture_and_write() {
            Ok(len) => {
                tracing::info!(path = %path.display(), bytes = len, "image saved");
                Outcome::Saved
            }
            Err(ExportError::Resolver(ResolverError::Cancelled)) => {
                tracing::info!("file selection cancelled");
                Outcome::Cancelled
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                Outcome::Failed(e)
            }
        }
    }

    fn capture_and_write(&self) -> Result<usize, ExportError> {
        let content = self.bridge.prompt_and_capture(PROMPT)?;
        if !content.starts_with(PNG_SIGNATURE) {
            tracing::warn!(
                bytes = content.len(),
                "clipboard data does not start with a PNG signature"
            );
        }

        let path = self.destination.path();
        self.sink
            .write_bytes(path, &content)
            .map_err(|source| ExportError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(content.len())
    }
}

fn report(outcome: &Outcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Saved => format::print_saved(out),
        Outcome::Cancelled => {
            format::print_cancelled(out)?;
            format::print_fallback(out)
        }
        Outcome::Failed(e) => {
            if !e.is_exit_status() {
                format::print_error(out, e)?;
            }
            format::print_fallback(out)
        }
    }
}
