//! Error types for the agenda crates.

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store format error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No event at index {index} (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
