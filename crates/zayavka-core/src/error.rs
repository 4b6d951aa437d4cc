//! Error types for the zayavka-core library.

use thiserror::Error;

/// Main error type for the zayavka library.
#[derive(Error, Debug)]
pub enum ZayavkaError {
    /// Application field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Dictionary (lookup table) error.
    #[error("lookup table error: {0}")]
    Lookup(#[from] LookupError),

    /// Register storage error.
    #[error("register error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while extracting fields from an application.
///
/// A field that simply is not present in the text is not an error; extractors
/// report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// An extractor hit malformed input or a malformed lookup table.
    #[error("{extractor}: {reason}")]
    ExtractorFault {
        extractor: &'static str,
        reason: String,
    },

    /// A date candidate could not be parsed with either year width.
    #[error("unsupported date format: {0}")]
    InvalidDateFormat(String),

    /// Replication count requested with a zero per-load capacity.
    #[error("division undefined: {quantity} / {capacity}")]
    DivisionUndefined { quantity: u32, capacity: u32 },

    /// Building the combined record failed.
    #[error("record assembly failed: {0}")]
    AssemblyFault(String),
}

impl ExtractionError {
    /// Shorthand for an extractor fault.
    pub fn fault(extractor: &'static str, reason: impl Into<String>) -> Self {
        Self::ExtractorFault {
            extractor,
            reason: reason.into(),
        }
    }
}

/// Errors related to loading dictionaries.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The dictionary file could not be read or parsed.
    #[error("failed to read {table} table: {source}")]
    Read {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A required column is missing from the dictionary file.
    #[error("{table} table is missing column `{column}`")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

/// Errors related to the register file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the CSV failed.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Underlying file I/O failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the zayavka library.
pub type Result<T> = std::result::Result<T, ZayavkaError>;
