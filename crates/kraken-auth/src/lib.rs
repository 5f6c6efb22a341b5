//! Authentication for the Kraken REST API
//!
//! Everything a private call needs before it can go on the wire: the API
//! credentials with the base64-decoded secret, the HMAC-SHA512 request
//! signature, and a strictly increasing nonce source.
//!
//! # Example
//!
//! ```
//! use kraken_auth::{Credentials, NonceGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::new("API_KEY", "c2VjcmV0LWJ5dGVz")?;
//! let nonces = NonceGenerator::new();
//!
//! let nonce = nonces.next();
//! let body = format!("nonce={}", nonce);
//! let signature = creds.sign("/0/private/Balance", &nonce, &body);
//! # let _ = signature;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod nonce;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use nonce::{NonceGenerator, DEFAULT_NONCE_OFFSET};
