//! Error types for token operations

use thiserror::Error;

/// Token operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// The one error the token API raises.
///
/// Every other failure (bad shape, signature mismatch, undecodable segment,
/// missing `exp`) is reported through a `false`/`None`/`true` return so that
/// checking untrusted input stays an ordinary conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JwtError {
    /// The secret is empty or contains a character outside `[0-9a-fA-F]`
    #[error("secret must be a non-empty string of hex digits")]
    InvalidSecret,
}

impl JwtError {
    /// Create an invalid secret error
    #[inline]
    #[must_use]
    pub fn invalid_secret() -> Self {
        JwtError::InvalidSecret
    }
}

/// Failure to turn a token segment back into JSON
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The segment is not unpadded URL-safe base64
    #[error("segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not a JSON document
    #[error("segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to load a signing secret from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment variable is unset or not unicode
    #[error("environment variable {var} is not set")]
    MissingVar {
        /// Name of the variable that was read
        var: String,
    },
    /// The variable is set but does not hold a hex secret
    #[error("environment variable {var}: {source}")]
    Secret {
        /// Name of the variable that was read
        var: String,
        /// Validation failure
        #[source]
        source: JwtError,
    },
}
