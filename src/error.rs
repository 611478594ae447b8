use std::path::PathBuf;

use thiserror::Error;

use crate::types::Tag;

#[derive(Error, Debug)]
pub enum BankError {
    /// A required path option was not given.
    #[error("no {0} given")]
    MissingInput(&'static str),

    /// A referenced input path does not exist.
    #[error("file {} not found", .0.display())]
    FileNotFound(PathBuf),

    /// An input table is not a single record table of the expected shape.
    #[error("unsupported table in {}: {reason}", path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },

    /// A selected or surviving tag has no row in the proposal table.
    #[error("tag {0} has no record in the proposal table")]
    InconsistentReference(Tag),

    /// A match file line could not be interpreted.
    #[error("{}:{line}: {reason}", path.display())]
    MalformedMatchRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The bank index could not be derived from the old bank file name.
    #[error("cannot derive bank index from {0}")]
    BankIndex(String),

    /// Invalid match file glob pattern.
    #[error("glob error: {0}")]
    Glob(String),

    /// Propagated CSV reader/writer error.
    #[error("table I/O error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated JSON serialization error.
    #[error("process record error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<glob::PatternError> for BankError {
    fn from(err: glob::PatternError) -> Self {
        BankError::Glob(err.to_string())
    }
}

impl From<glob::GlobError> for BankError {
    fn from(err: glob::GlobError) -> Self {
        BankError::Glob(err.to_string())
    }
}
