//! macOS clipboard bridge: AppleScript via `osascript`.
//!
//! Seeding reads the chosen file into the clipboard as `«class PNGf»`.
//! Reading asks for the same class back; `osascript` prints it as an
//! AppleScript data literal, `«data PNGf89504E47…»`, which is decoded
//! from hex here.

use std::sync::LazyLock;

use bytes::Bytes;
use regex::Regex;

use super::{ClipboardBridge, ResolverError, command};

const OSASCRIPT: &str = "osascript";

/// AppleScript error number for "User canceled."
const USER_CANCELED: &str = "(-128)";

const READ_SCRIPT: &str = "get the clipboard as «class PNGf»";

static DATA_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^«data PNGf([0-9A-Fa-f]*)»\s*$").expect("data literal pattern is valid")
});

/// `ClipboardBridge` backed by `osascript`.
pub struct OsascriptBridge;

impl OsascriptBridge {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardBridge for OsascriptBridge {
    fn seed_from_picker(&self, prompt: &str) -> Result<(), ResolverError> {
        let script = seed_script(prompt);
        command::capture(OSASCRIPT, &["-e", script.as_str()]).map_err(classify)?;
        Ok(())
    }

    fn read_png(&self) -> Result<Bytes, ResolverError> {
        let stdout = command::capture(OSASCRIPT, &["-e", READ_SCRIPT])?;
        decode_data_literal(&String::from_utf8_lossy(&stdout))
    }
}

/// Map the chooser's "User canceled." error to `Cancelled`.
fn classify(err: ResolverError) -> ResolverError {
    match err {
        ResolverError::Command { ref stderr, .. } if stderr.contains(USER_CANCELED) => {
            ResolverError::Cancelled
        }
        other => other,
    }
}

fn seed_script(prompt: &str) -> String {
    format!(
        "set the clipboard to (read (choose file with prompt {}) as «class PNGf»)",
        quote(prompt)
    )
}

/// Quote `s` as an AppleScript string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn decode_data_literal(text: &str) -> Result<Bytes, ResolverError> {
    let caps = DATA_LITERAL
        .captures(text.trim_start())
        .ok_or_else(|| ResolverError::Decode("clipboard does not hold PNG data".into()))?;
    let hex = &caps[1];

    if hex.len() % 2 != 0 {
        return Err(ResolverError::Decode(format!(
            "odd hex length {} in PNG data literal",
            hex.len()
        )));
    }

    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| ResolverError::Decode(format!("bad hex in PNG data literal: {e}")))?;

    Ok(Bytes::from(bytes))
}
