//! `zenity` file chooser shared by the X11 and Wayland bridges.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use super::{ResolverError, command};

const ZENITY: &str = "zenity";

/// Exit code zenity uses when the dialog is dismissed.
const ZENITY_CANCELLED: i32 = 1;

/// Show a PNG file chooser titled `prompt` and return the chosen path.
pub fn choose_png(prompt: &str) -> Result<PathBuf, ResolverError> {
    let title = format!("--title={prompt}");
    let args = [
        "--file-selection",
        title.as_str(),
        "--file-filter=PNG images | *.png *.PNG",
    ];

    let stdout = command::capture(ZENITY, &args).map_err(classify)?;
    parse_selection(&stdout)
}

/// Map a dismissed dialog to `Cancelled`; other errors pass through.
fn classify(err: ResolverError) -> ResolverError {
    match err {
        ResolverError::Command {
            code: Some(ZENITY_CANCELLED),
            ..
        } => ResolverError::Cancelled,
        other => other,
    }
}

/// Parse zenity's stdout (the chosen path plus a trailing newline).
///
/// The path is kept as raw bytes, so non-UTF-8 file names survive.
fn parse_selection(stdout: &[u8]) -> Result<PathBuf, ResolverError> {
    let end = stdout
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    let path = &stdout[..end];
    if path.is_empty() {
        return Err(ResolverError::Cancelled);
    }
    Ok(PathBuf::from(OsStr::from_bytes(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_strips_newline() {
        let path = parse_selection(b"/home/me/Pictures/shot.png\n").unwrap();
        assert_eq!(path, PathBuf::from("/home/me/Pictures/shot.png"));
    }

    #[test]
    fn selection_keeps_inner_spaces() {
        let path = parse_selection(b"/home/me/My Shots/a b.png\n").unwrap();
        assert_eq!(path, PathBuf::from("/home/me/My Shots/a b.png"));
    }

    #[test]
    fn selection_keeps_non_utf8_bytes() {
        let path = parse_selection(b"/tmp/caf\xe9.png\n").unwrap();
        assert_eq!(path.as_os_str().as_bytes(), b"/tmp/caf\xe9.png");
    }

    #[test]
    fn dismissed_dialog_is_cancelled() {
        let err = classify(ResolverError::Command {
            program: "zenity".into(),
            code: Some(1),
            stderr: String::new(),
        });
        assert!(matches!(err, ResolverError::Cancelled));
    }

    #[test]
    fn other_exit_codes_pass_through() {
        let err = classify(ResolverError::Command {
            program: "zenity".into(),
            code: Some(2),
            stderr: "cannot open display".into(),
        });
        assert!(matches!(err, ResolverError::Command { code: Some(2), .. }));

        let err = classify(ResolverError::Decode("x".into()));
        assert!(matches!(err, ResolverError::Decode(_)));
    }

    #[test]
    fn empty_selection_is_cancelled() {
        assert!(matches!(
            parse_selection(b"\n"),
            Err(ResolverError::Cancelled)
        ));
    }
}
