use thiserror::Error;

/// Unified error type for gitver operations
#[derive(Error, Debug)]
pub enum GitverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version derivation error: {0}")]
    Version(String),

    #[error("Timestamp error: {0}")]
    Timestamp(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitver
pub type Result<T> = std::result::Result<T, GitverError>;

impl GitverError {
    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        GitverError::Repository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitverError::Config(msg.into())
    }

    /// Create a version derivation error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitverError::Version(msg.into())
    }

    /// Create a timestamp error with context
    pub fn timestamp(msg: impl Into<String>) -> Self {
        GitverError::Timestamp(msg.into())
    }
}
