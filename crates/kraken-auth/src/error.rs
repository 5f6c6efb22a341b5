//! Error types for authentication

/// Errors raised while building or using credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The API secret could not be decoded
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
