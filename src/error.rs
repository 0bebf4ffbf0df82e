//! Error types for the napdf library.

use std::io;
use thiserror::Error;

/// Result type alias for napdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a schedule to PDF.
///
/// Parsing Markdown never fails: unrecognized lines degrade to plain
/// bullets or are skipped, so there is no parse variant here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid page size specification.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),

    /// Error compressing a content stream.
    #[error("Compression error: {0}")]
    Compression(String),

    /// Error serializing the schedule model.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
