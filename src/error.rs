use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IapsError>;

#[derive(Error, Debug)]
pub enum IapsError {
    /// Propagated I/O error (missing scoring file, unreadable path).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line in the scoring file is malformed.
    #[error("scoring file line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A sample larger than the matching population was requested.
    #[error("requested a sample of {requested} pictures but only {available} match")]
    SampleSize { requested: usize, available: usize },
}
