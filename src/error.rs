use thiserror::Error as ThisError;

/// Result type alias for kdscan operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, ThisError)]
pub enum Error {
    /// A parameter or query failed validation before any work was done.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The cluster-identifier range was exhausted while unprocessed points
    /// remained. Re-running with a larger `eps` usually resolves this.
    #[error("cluster identifier range exhausted with {remaining} points left to scan")]
    Overflow { remaining: usize },
}
