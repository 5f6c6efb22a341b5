//! Error types for REST API operations

use kraken_models::ApiError;

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The API secret was malformed or the environment was incomplete
    #[error("invalid credentials: {0}")]
    InvalidCredentials(#[from] kraken_auth::AuthError),

    /// Missing API credentials for a private endpoint
    #[error("authentication required for this endpoint")]
    AuthRequired,

    /// The HTTP round trip failed
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Request parameters could not be encoded
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The exchange answered with at least one Error-severity record.
    /// Carries every record from the response, warnings included.
    #[error("exchange error: {}", format_records(.0))]
    Exchange(Vec<ApiError>),

    /// The blocking runtime could not be started
    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl RestError {
    /// The exchange's error records, when this is an [`RestError::Exchange`]
    pub fn exchange_records(&self) -> Option<&[ApiError]> {
        match self {
            Self::Exchange(records) => Some(records),
            _ => None,
        }
    }
}

fn format_records(records: &[ApiError]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
