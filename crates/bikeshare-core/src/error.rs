use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A city data file is not valid CSV.
    #[error("Failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column every city file must carry is absent from the header.
    #[error("Missing required column \"{column}\" in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A data row could not be mapped onto a trip record.
    #[error("Invalid record at line {line} of {path}: {message}")]
    InvalidRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A city name is not one of the known cities.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A month selector is not january..june or "all".
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// A day selector is not a weekday name or "all".
    #[error("Invalid day: {0}")]
    InvalidDay(String),

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("Input closed while waiting for an answer")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
