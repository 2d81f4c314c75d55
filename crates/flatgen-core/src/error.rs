use thiserror::Error;

/// Core error type shared across flatgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Control flags fall outside their allowed domain.
    #[error("invalid control flags: {0}")]
    InvalidFlags(String),
    /// A format name did not match any known file format.
    #[error("unknown file format: {0}")]
    UnknownFormat(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by flatgen crates.
pub type Result<T> = std::result::Result<T, Error>;
