//! Error types for Ember.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Secret errors
    #[error("Secret key not provided")]
    SecretNotProvided,

    #[error("Secret not found: {0}")]
    SecretNotFound(String),

    #[error("Failed to read secret {name}: {source}")]
    SecretRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    // Generic
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
