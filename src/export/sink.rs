//! Image sink: persists captured clipboard bytes.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes image bytes to a path.
pub trait ImageSink {
    fn write_bytes(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// Filesystem sink.
///
/// Creates or truncates the file, writes all bytes and flushes. The
/// handle is closed when it leaves scope, on success and on error. Parent
/// directories are not created.
pub struct FsSink;

impl ImageSink for FsSink {
    fn write_bytes(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(content)?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_write_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.png");
        let content = b"\x89PNG\r\n\x1a\nrest";

        FsSink.write_bytes(&path, content).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), content);
    }

    #[test]
    fn file_write_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.png");
        std::fs::write(&path, b"a much longer previous image").unwrap();

        FsSink.write_bytes(&path, b"short").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn file_write_bad_path() {
        let result = FsSink.write_bytes(Path::new("/nonexistent/dir/file.png"), b"data");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
