use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ElfError, Result};

/// Tunables for the parser. Every field falls back to the value real reports use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Product name that opens every report; in-memory buffers are cut to start here.
    pub anchor: String,
    /// Column separator in tables.
    pub column_delimiter: char,
    /// Minimum dash run that marks a table divider line.
    pub table_delimiter_min: usize,
    /// Leading lines of a pipe table (title and divider rows) that never hold data.
    pub table_header_rows: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            anchor: "Eureka".to_string(),
            column_delimiter: '|',
            table_delimiter_min: 20,
            table_header_rows: 2,
        }
    }
}

impl ParseOptions {
    /// Loads options from a JSON file. Missing keys keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ElfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = serde_json::from_str(&content)?;
        log::debug!("Loaded parse options from {:?}", path);
        Ok(options)
    }

    /// True when `line` starts with optional column delimiters followed by a long dash run.
    pub fn is_table_delimiter(&self, line: &str) -> bool {
        let rest = line.trim_start_matches(self.column_delimiter);
        rest.chars().take_while(|c| *c == '-').count() >= self.table_delimiter_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_options_keep_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "anchor": "MadExcept" }}"#).unwrap();

        let options = ParseOptions::load_from_path(file.path()).unwrap();
        assert_eq!(options.anchor, "MadExcept");
        assert_eq!(options.column_delimiter, '|');
        assert_eq!(options.table_delimiter_min, 20);
    }

    #[test]
    fn test_malformed_options() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ anchor: ").unwrap();
        assert!(matches!(
            ParseOptions::load_from_path(file.path()),
            Err(ElfError::Config(_))
        ));
    }

    #[test]
    fn test_missing_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            ParseOptions::load_from_path(&missing),
            Err(ElfError::Io { .. })
        ));
    }

    #[test]
    fn test_table_delimiter_detection() {
        let options = ParseOptions::default();
        assert!(options.is_table_delimiter(&"-".repeat(20)));
        assert!(options.is_table_delimiter(&format!("|{}|", "-".repeat(40))));
        assert!(!options.is_table_delimiter(&"-".repeat(19)));
        assert!(!options.is_table_delimiter(&format!("  {}", "-".repeat(30))));
        assert!(!options.is_table_delimiter("|Methods |Details|"));
    }
}
