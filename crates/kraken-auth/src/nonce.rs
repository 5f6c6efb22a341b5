//! Monotonic nonce generation for private calls
//!
//! Kraken rejects a private request whose nonce is not strictly greater than
//! the last one seen for the credential set, so every generator instance
//! guarantees a strictly increasing sequence even when the clock stalls or
//! two calls land in the same millisecond.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Additive offset applied to the millisecond clock before widening
pub const DEFAULT_NONCE_OFFSET: u64 = 123;

/// Smallest 16-digit decimal number; candidates are widened up to here
const SIXTEEN_DIGIT_FLOOR: u64 = 1_000_000_000_000_000;

/// Produces the `nonce` parameter values for one client instance.
///
/// A candidate is the wall-clock millisecond count plus a fixed offset,
/// zero-filled on the right to 16 decimal digits. The trailing fill keeps
/// candidates ordered as long as the millisecond count itself never shrinks;
/// the last-issued value is tracked so a candidate that does not exceed it
/// (same-millisecond call, clock step backwards) is bumped past it instead
/// of being reissued.
#[derive(Debug)]
pub struct NonceGenerator {
    offset: u64,
    last: AtomicU64,
}

impl NonceGenerator {
    /// Generator with the default offset
    pub fn new() -> Self {
        Self::with_offset(DEFAULT_NONCE_OFFSET)
    }

    /// Generator with a custom additive offset
    pub fn with_offset(offset: u64) -> Self {
        Self {
            offset,
            last: AtomicU64::new(0),
        }
    }

    /// Issue the next nonce as a 16-digit decimal string.
    pub fn next(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();

        let mut candidate = millis.saturating_add(self.offset).max(1);
        while candidate < SIXTEEN_DIGIT_FLOOR {
            candidate *= 10;
        }

        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(if candidate > last { candidate } else { last + 1 })
            })
            .unwrap_or_else(|last| last);

        let issued = if candidate > previous {
            candidate
        } else {
            previous + 1
        };

        issued.to_string()
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
