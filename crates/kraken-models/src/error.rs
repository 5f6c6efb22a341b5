//! Structured error records for Kraken API error strings
//!
//! Kraken reports failures as compact strings inside the response envelope's
//! `error` array, formatted as
//! `<char-severity code><string-error category>:<string-error type>[:<string-extra info>]`,
//! e.g. `EGeneral:Unknown method` or `WVolume:Fee volume currency:low volume`.

use serde::Deserialize;

/// Severity of a returned error string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A hard failure
    Error,
    /// An advisory; never fails a call on its own
    Warning,
}

/// One parsed entry from the envelope's `error` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Severity derived from the leading character (`W` = warning)
    pub severity: Severity,
    /// Error category, e.g. `General`, `Order`, `Query`
    pub category: String,
    /// Error type within the category, e.g. `Unknown method`
    pub kind: String,
    /// Extra information, if the string carried a third segment
    pub extra: Option<String>,
}

impl ApiError {
    /// Parse a single wire string.
    ///
    /// The leading character selects the severity; the remainder is split on
    /// the first two colons only, so `extra` keeps any further colons intact.
    pub fn parse(raw: &str) -> Self {
        let mut chars = raw.chars();
        let severity = match chars.next() {
            Some('W') => Severity::Warning,
            _ => Severity::Error,
        };

        let mut parts = chars.as_str().splitn(3, ':');
        let category = parts.next().unwrap_or_default().to_string();
        let kind = parts.next().unwrap_or_default().to_string();
        let extra = parts.next().map(str::to_string);

        Self {
            severity,
            category,
            kind,
            extra,
        }
    }

    /// Whether this record is a hard failure
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.kind)?;
        if let Some(extra) = &self.extra {
            write!(f, " ({})", extra)?;
        }
        Ok(())
    }
}

/// Envelope projection used when only the error array matters
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Vec<String>,
}

/// Decode every error record carried by a raw response body.
///
/// An empty or whitespace-only body has no content to decode and yields an
/// empty list, as does an envelope whose `error` array is empty or contains
/// only blank entries. Blank entries are skipped, not turned into empty
/// records. Anything that is not a JSON envelope is a deserialization error
/// for the caller to classify.
pub fn decode_errors(body: &str) -> Result<Vec<ApiError>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let envelope: ErrorEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .error
        .iter()
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| ApiError::parse(entry))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_severity() {
        let err = ApiError::parse("EGeneral:Unknown method");
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.category, "General");
        assert_eq!(err.kind, "Unknown method");
        assert_eq!(err.extra, None);
        assert!(err.is_error());
    }

    #[test]
    fn test_parse_warning_severity() {
        let err = ApiError::parse("WVolume:Fee volume currency");
        assert_eq!(err.severity, Severity::Warning);
        assert_eq!(err.category, "Volume");
        assert_eq!(err.kind, "Fee volume currency");
        assert!(!err.is_error());
    }

    #[test]
    fn test_parse_extra_segment() {
        let err = ApiError::parse("EOrder:Invalid order:volume minimum not met");
        assert_eq!(err.category, "Order");
        assert_eq!(err.kind, "Invalid order");
        assert_eq!(err.extra.as_deref(), Some("volume minimum not met"));
    }

    #[test]
    fn test_extra_segment_is_not_resplit() {
        let err = ApiError::parse("EQuery:Unknown asset pair:a:b:c");
        assert_eq!(err.kind, "Unknown asset pair");
        assert_eq!(err.extra.as_deref(), Some("a:b:c"));
    }

    #[test]
    fn test_parse_without_kind_segment() {
        let err = ApiError::parse("EGeneral");
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.category, "General");
        assert_eq!(err.kind, "");
        assert_eq!(err.extra, None);
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(decode_errors("").unwrap().is_empty());
        assert!(decode_errors("   \n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_empty_error_array() {
        let body = r#"{"error":[],"result":{"unixtime":1}}"#;
        assert!(decode_errors(body).unwrap().is_empty());
    }

    #[test]
    fn test_decode_missing_error_field() {
        assert!(decode_errors(r#"{"result":{}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_skips_blank_entries() {
        let body = r#"{"error":["", "  ", "EService:Unavailable"]}"#;
        let errors = decode_errors(body).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, "Service");
    }

    #[test]
    fn test_decode_keeps_warnings_and_errors() {
        let body = r#"{"error":["WGeneral:Danger zone","EAPI:Invalid key"]}"#;
        let errors = decode_errors(body).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].severity, Severity::Warning);
        assert_eq!(errors[1].severity, Severity::Error);
    }

    #[test]
    fn test_decode_rejects_non_envelope() {
        assert!(decode_errors("not json").is_err());
    }

    #[test]
    fn test_display_format() {
        let err = ApiError::parse("EOrder:Insufficient funds:ZUSD");
        assert_eq!(err.to_string(), "Order: Insufficient funds (ZUSD)");
    }
}
