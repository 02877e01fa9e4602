//! Error types for the lunacal ecosystem.

use thiserror::Error;

/// Errors that can occur in lunacal operations.
#[derive(Error, Debug)]
pub enum LunacalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider '{0}' not found in PATH")]
    ProviderNotInstalled(String),

    #[error("Provider request timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("No remote configured")]
    NoRemoteConfigured,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for lunacal operations.
pub type LunacalResult<T> = Result<T, LunacalError>;
