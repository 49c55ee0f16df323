//! Acquisition of report text from files and in-memory buffers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ElfError, Result};

/// Line separator inside an escaped attachment buffer. This is the four characters
/// `\`, `r`, `\`, `n`, not a real line ending.
pub const ESCAPED_LINE_BREAK: &str = "\\r\\n";

/// Reads a UTF-8 report file, accepting `\n` and `\r\n` line endings.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let io_error = |source| ElfError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_error)
}

/// Splits an escaped attachment buffer into lines.
///
/// Everything before the first `anchor` is transport framing and is discarded.
pub fn split_stream(buffer: &[u8], anchor: &str) -> Result<Vec<String>> {
    if buffer.is_empty() {
        return Err(ElfError::UnparsableInput(
            "no log file name or contents provided".to_string(),
        ));
    }

    let text = String::from_utf8_lossy(buffer);
    let start = text.find(anchor).ok_or_else(|| {
        ElfError::UnparsableInput(format!("anchor '{}' not found in log contents", anchor))
    })?;

    Ok(text[start..]
        .split(ESCAPED_LINE_BREAK)
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lines_handles_crlf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"EurekaLog 7\r\nUser:\r\n  3.1 ID : 1\n").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["EurekaLog 7", "User:", "  3.1 ID : 1"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("missing.el")).unwrap_err();
        assert!(matches!(err, ElfError::Io { .. }));
    }

    #[test]
    fn test_split_stream_strips_framing() {
        let buffer = b"b'\x00\x01junkEurekaLog 7.7\\r\\nUser:\\r\\n  3.1 ID : 1'";
        let lines = split_stream(buffer, "Eureka").unwrap();
        assert_eq!(lines, vec!["EurekaLog 7.7", "User:", "  3.1 ID : 1'"]);
    }

    #[test]
    fn test_split_stream_ignores_real_newlines() {
        let lines = split_stream(b"Eureka\nUser:", "Eureka").unwrap();
        assert_eq!(lines, vec!["Eureka\nUser:"]);
    }

    #[test]
    fn test_split_stream_without_anchor() {
        assert!(matches!(
            split_stream(b"nothing here", "Eureka"),
            Err(ElfError::UnparsableInput(_))
        ));
        assert!(matches!(
            split_stream(b"", "Eureka"),
            Err(ElfError::UnparsableInput(_))
        ));
    }
}
