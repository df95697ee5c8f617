//! Error types for mergewatch

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All errors mergewatch can produce
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API request failed at the transport level (network, auth,
    /// rate-limit, unexpected status). Never retried.
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// The remote never finished computing mergeability within the retry
    /// budget.
    #[error("merge status for {pr} still computing after {attempts} queries")]
    StatusTimeout {
        /// The pull request being resolved
        pr: String,
        /// Total queries issued before giving up
        attempts: u32,
    },

    /// A pull request reference could not be parsed
    #[error("invalid pull request reference: {0}")]
    InvalidPrRef(String),

    /// Configuration loading or validation failed
    #[error("configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}
