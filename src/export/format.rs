//! Status lines printed by the exporter.
//!
//! Stdout carries only these lines; diagnostics go through `tracing`.

use std::fmt::Display;
use std::io::{self, Write};

use super::destination::{ASSET_DIR, FILE_NAME};

pub fn print_saved(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Image saved successfully!")
}

pub fn print_error(out: &mut impl Write, error: &impl Display) -> io::Result<()> {
    writeln!(out, "Error: {error}")
}

pub fn print_cancelled(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Selection cancelled.")
}

/// Manual-action instruction shown whenever the export did not complete.
pub fn print_fallback(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Please manually save the image as {FILE_NAME} in {ASSET_DIR}/"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn fallback_names_file_and_directory() {
        assert_eq!(
            render(|out| print_fallback(out)),
            "Please manually save the image as LogHoursInterface.png in src/assets/\n"
        );
    }

    #[test]
    fn error_is_prefixed() {
        assert_eq!(
            render(|out| print_error(out, &"xclip exited with exit code 1")),
            "Error: xclip exited with exit code 1\n"
        );
    }

    #[test]
    fn saved_line() {
        assert_eq!(render(|out| print_saved(out)), "Image saved successfully!\n");
    }
}
