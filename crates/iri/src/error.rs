//! Error types for the iri crate

use thiserror::Error;

/// Result type for iri operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the IRI model
#[derive(Error, Debug)]
pub enum Error {
    /// Flag index outside the native 1..=50 range
    #[error("flag index {0} outside the native range 1..=50")]
    InvalidFlagIndex(usize),

    /// Latitude outside [-90, 90] degrees
    #[error("latitude {0} outside [-90, 90] degrees")]
    InvalidLatitude(f32),

    /// Longitude outside [-180, 180] degrees
    #[error("longitude {0} outside [-180, 180] degrees")]
    InvalidLongitude(f32),

    /// Date selector outside the oracle's encoding range
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Non-positive step, begin > end, or row count outside [1, 1000]
    #[error("invalid height range: {0}")]
    InvalidHeightRange(String),

    /// Priming the model (index data files) failed
    #[error("model startup failed: {0}")]
    Startup(String),

    /// The report sink could not be opened or written
    #[error("failed to write report: {0}")]
    OutputWrite(String),

    /// I/O error (file operations other than report writing)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::OutputWrite(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::OutputWrite(e.to_string())
    }
}
