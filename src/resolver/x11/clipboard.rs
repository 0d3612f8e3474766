//! X11 clipboard bridge: read/write via `xclip`.
//!
//! Seeding hands the chosen file straight to `xclip -i`, which forks and
//! keeps owning the selection after this process exits. Reading asks for
//! the `image/png` target only, so a text clipboard is reported as a
//! failure rather than written to disk.

use std::ffi::OsStr;
use std::path::Path;

use bytes::Bytes;

use crate::resolver::{ClipboardBridge, ResolverError, chooser, command};

const XCLIP: &str = "xclip";
const PNG_TARGET: &str = "image/png";

/// X11 implementation of `ClipboardBridge` via `zenity` and `xclip`.
pub struct X11Bridge;

impl X11Bridge {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardBridge for X11Bridge {
    fn seed_from_picker(&self, prompt: &str) -> Result<(), ResolverError> {
        let file = chooser::choose_png(prompt)?;
        tracing::debug!(file = %file.display(), "seeding X11 clipboard");
        command::status(XCLIP, &seed_args(&file), None)
    }

    fn read_png(&self) -> Result<Bytes, ResolverError> {
        let stdout = command::capture(XCLIP, &read_args())?;
        if stdout.is_empty() {
            return Err(ResolverError::Decode("clipboard is empty".into()));
        }
        Ok(Bytes::from(stdout))
    }
}

fn seed_args(file: &Path) -> [&OsStr; 6] {
    [
        OsStr::new("-selection"),
        OsStr::new("clipboard"),
        OsStr::new("-t"),
        OsStr::new(PNG_TARGET),
        OsStr::new("-i"),
        file.as_os_str(),
    ]
}

fn read_args() -> [&'static str; 5] {
    ["-selection", "clipboard", "-t", PNG_TARGET, "-o"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_targets_png_clipboard() {
        let args = seed_args(Path::new("/tmp/shot.png"));
        assert_eq!(
            args,
            ["-selection", "clipboard", "-t", "image/png", "-i", "/tmp/shot.png"]
        );
    }

    #[test]
    fn seed_passes_non_utf8_path_unchanged() {
        use std::os::unix::ffi::OsStrExt;

        let file = Path::new(OsStr::from_bytes(b"/tmp/caf\xe9.png"));
        assert_eq!(seed_args(file)[5].as_bytes(), b"/tmp/caf\xe9.png");
    }

    #[test]
    fn read_targets_png_clipboard() {
        assert_eq!(
            read_args(),
            ["-selection", "clipboard", "-t", "image/png", "-o"]
        );
    }
}
