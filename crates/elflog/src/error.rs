use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while acquiring or querying a crash report.
#[derive(Debug, Error)]
pub enum ElfError {
    /// Neither a file path nor usable in-memory content was supplied.
    #[error("unable to parse log: {0}")]
    UnparsableInput(String),

    /// The requested section was not found in raw or canonical form.
    #[error("section not found: {0}")]
    SectionNotFound(String),

    /// A section is declared in the schema registry but no strategy is registered for it.
    #[error("no parser registered for section: {0}")]
    UnknownSectionHandler(String),

    /// A field required by a caller does not exist in the section schema.
    #[error("section '{section}' has no field '{field}'")]
    UnknownField { section: String, field: String },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parse options: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ElfError>;
