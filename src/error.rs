//! Unified error types for psconv.
//!
//! Conversion itself has no recoverable failure modes; everything that
//! can go wrong is either I/O on the target file or the buffer failing
//! to grow. Both are fatal to the run and surface here.
use thiserror::Error;

/// Main error type for psconv operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source buffer could not grow to hold an inserted escape
    #[error("failed to allocate memory to grow the source buffer: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
}

/// Result type for psconv operations.
pub type Result<T> = std::result::Result<T, Error>;
