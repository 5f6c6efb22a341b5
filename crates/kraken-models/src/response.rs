//! Standard Kraken API response envelope

use serde::Deserialize;

use crate::error::ApiError;

/// Wrapper every REST response arrives in: an `error` array plus the
/// method-specific `result` payload.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Error strings (empty on success)
    #[serde(default)]
    pub error: Vec<String>,
    /// Result data (present if successful)
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Parse the error array into structured records, skipping blank entries
    pub fn errors(&self) -> Vec<ApiError> {
        self.error
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| ApiError::parse(entry))
            .collect()
    }

    /// True when no Error-severity record is present
    pub fn is_success(&self) -> bool {
        !self.errors().iter().any(ApiError::is_error)
    }

    /// Take the result, or the full record list when any record is a hard
    /// failure. Warnings accompany the error list rather than replacing the
    /// result on their own.
    pub fn into_result(self) -> Result<T, Vec<ApiError>> {
        let errors = self.errors();
        if errors.iter().any(ApiError::is_error) {
            return Err(errors);
        }
        self.result
            .ok_or_else(|| vec![ApiError::parse("EGeneral:Missing result")])
    }
}
