//! ClipboardBridge trait: file chooser and clipboard image access.

use bytes::Bytes;

use super::ResolverError;

/// Routes a user-chosen image through the system clipboard.
///
/// Platform adapters implement the two primitive steps. The exporter
/// only calls [`prompt_and_capture`](Self::prompt_and_capture), which
/// never reads the clipboard unless seeding succeeded.
pub trait ClipboardBridge {
    /// Show a file chooser with `prompt` and place the chosen image on
    /// the clipboard as PNG.
    fn seed_from_picker(&self, prompt: &str) -> Result<(), ResolverError>;

    /// Read the PNG bytes currently on the clipboard.
    fn read_png(&self) -> Result<Bytes, ResolverError>;

    /// Seed the clipboard from the chooser, then read it back.
    fn prompt_and_capture(&self, prompt: &str) -> Result<Bytes, ResolverError> {
        self.seed_from_picker(prompt)?;
        self.read_png()
    }
}
