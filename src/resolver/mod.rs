//! Resolver abstraction: pluggable platform adapters.
//!
//! All platform-specific behavior (file chooser, clipboard seeding and
//! reading) sits behind [`ClipboardBridge`]. One adapter is selected at
//! startup from the `--backend` flag and the session environment.

pub mod chooser;
pub mod clipboard;
pub mod command;
pub mod macos;
pub mod wayland;
pub mod x11;

pub use clipboard::ClipboardBridge;

use crate::cli::Backend;

/// Errors returned by resolver adapters.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// The user dismissed the file chooser.
    #[error("selection cancelled")]
    Cancelled,

    /// An automation utility could not be started (e.g. not installed).
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An automation utility ran and reported failure.
    #[error("{program} exited with {}{}", describe_code(.code), describe_stderr(.stderr))]
    Command {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Clipboard output could not be turned into image bytes.
    #[error("clipboard data: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "signal".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Resolve `Backend::Auto` to a concrete backend.
///
/// macOS builds always use AppleScript. Elsewhere a non-empty
/// `WAYLAND_DISPLAY` selects Wayland, anything else falls back to X11.
pub fn resolve_backend(
    requested: Backend,
    is_macos: bool,
    wayland_display: Option<&str>,
) -> Backend {
    match requested {
        Backend::Auto if is_macos => Backend::Macos,
        Backend::Auto => match wayland_display {
            Some(d) if !d.is_empty() => Backend::Wayland,
            _ => Backend::X11,
        },
        explicit => explicit,
    }
}

/// Construct the clipboard bridge for the requested backend.
pub fn bridge_for(requested: Backend) -> Box<dyn ClipboardBridge> {
    let wayland_display = std::env::var("WAYLAND_DISPLAY").ok();
    let backend = resolve_backend(
        requested,
        cfg!(target_os = "macos"),
        wayland_display.as_deref(),
    );
    tracing::debug!(?requested, ?backend, "clipboard bridge selected");

    match backend {
        Backend::Macos => Box::new(macos::OsascriptBridge::new()),
        Backend::Wayland => Box::new(wayland::WaylandBridge::new()),
        Backend::X11 | Backend::Auto => Box::new(x11::X11Bridge::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_on_macos_picks_osascript() {
        assert_eq!(
            resolve_backend(Backend::Auto, true, Some("wayland-0")),
            Backend::Macos
        );
    }

    #[test]
    fn auto_with_wayland_display() {
        assert_eq!(
            resolve_backend(Backend::Auto, false, Some("wayland-0")),
            Backend::Wayland
        );
    }

    #[test]
    fn auto_without_wayland_falls_back_to_x11() {
        assert_eq!(resolve_backend(Backend::Auto, false, None), Backend::X11);
        assert_eq!(resolve_backend(Backend::Auto, false, Some("")), Backend::X11);
    }

    #[test]
    fn explicit_backend_is_kept() {
        assert_eq!(
            resolve_backend(Backend::Wayland, true, None),
            Backend::Wayland
        );
        assert_eq!(resolve_backend(Backend::Macos, false, None), Backend::Macos);
    }

    #[test]
    fn command_error_display() {
        let err = ResolverError::Command {
            program: "osascript".into(),
            code: Some(1),
            stderr: "execution error".into(),
        };
        assert_eq!(
            err.to_string(),
            "osascript exited with exit code 1: execution error"
        );

        let err = ResolverError::Command {
            program: "xclip".into(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "xclip exited with signal");
    }
}
