//! Error types for the oxo crate

use thiserror::Error;

/// Errors surfaced while collecting a move from the human player.
///
/// The board and the search never produce these: every action reaching them
/// has already been validated, and a contract violation there is a bug that
/// panics rather than unwinding as a recoverable error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid coordinate '{input}' (expected a number in 0-2)")]
    InvalidCoordinate { input: String },

    #[error("coordinate {value} is out of range (must be 0-2)")]
    OutOfRange { value: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "exchange terminal input".to_string(),
            source,
        }
    }
}
