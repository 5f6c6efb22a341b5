//! Server time model

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Result of the public `Time` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    /// Unix timestamp in seconds
    pub unixtime: u64,
    /// The same instant as an RFC-1123 string
    pub rfc1123: String,
}

impl ServerTime {
    /// Parse the RFC-1123 representation into a UTC instant.
    ///
    /// RFC 1123 timestamps are valid RFC 2822, which is the parser chrono
    /// ships.
    pub fn to_datetime(&self) -> chrono::ParseResult<DateTime<Utc>> {
        DateTime::parse_from_rfc2822(&self.rfc1123).map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_rfc1123_roundtrip() {
        let time: ServerTime = serde_json::from_str(
            r#"{"unixtime":1489330123,"rfc1123":"Sun, 12 Mar 2017 14:48:43 +0000"}"#,
        )
        .unwrap();

        let utc = time.to_datetime().unwrap();
        assert_eq!(utc.year(), 2017);
        assert_eq!(utc.month(), 3);
        assert_eq!(utc.day(), 12);
        assert_eq!(utc.hour(), 14);
        assert_eq!(utc.minute(), 48);
        assert_eq!(utc.second(), 43);
    }

    #[test]
    fn test_rfc1123_offset_is_normalized_to_utc() {
        let time = ServerTime {
            unixtime: 0,
            rfc1123: "Sun, 12 Mar 2017 16:48:43 +0200".to_string(),
        };
        let utc = time.to_datetime().unwrap();
        assert_eq!(utc.hour(), 14);
    }

    #[test]
    fn test_garbage_timestamp_is_an_error() {
        let time = ServerTime {
            unixtime: 0,
            rfc1123: "not a timestamp".to_string(),
        };
        assert!(time.to_datetime().is_err());
    }
}
