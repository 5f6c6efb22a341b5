//! REST API client for the Kraken cryptocurrency exchange
//!
//! This crate covers the authenticated request pipeline (nonce management,
//! HMAC-SHA512 request signing, public/private dispatch, structured decoding
//! of the exchange's error envelope) plus a bounded-freshness cache that
//! shields the reference-data endpoints (assets, asset pairs) from redundant
//! round trips.
//!
//! # Endpoints
//!
//! - **Public**: server time, assets, asset pairs (with client-side
//!   filtering over the cached full set)
//! - **Private**: balance, trade balance, open orders
//! - **Raw**: `query_public` / `query_private` reach any method by name
//!
//! # Authentication
//!
//! Private endpoints are signed per Kraken's scheme: base64-encoded
//! HMAC-SHA512 over the URI path and `SHA256(nonce || body)`, keyed with the
//! decoded API secret, sent in the `API-Key` / `API-Sign` headers.
//!
//! # Example
//!
//! ```no_run
//! use kraken_rest::KrakenClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KrakenClient::new();
//!
//!     // Cached after the first call; at most one fetch per 15 minutes
//!     let eur = client.assets_filtered("EUR").await?;
//!     println!("{:?}", eur);
//!
//!     Ok(())
//! }
//! ```
//!
//! A fully-blocking mirror of the same surface lives in [`blocking`]. All
//! HTTP goes through the [`transport::HttpTransport`] trait, so tests can
//! script responses instead of hitting the network; see
//! [`transport::ScriptedTransport`].
//!
//! No retries, rate limiting or back-off happen anywhere in this crate:
//! every failure surfaces immediately as a [`RestError`].

pub mod blocking;
pub mod cache;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod transport;

// Re-export main types
pub use blocking::BlockingClient;
pub use client::KrakenClient;
pub use config::ClientConfig;
pub use error::{RestError, RestResult};
pub use transport::{HttpTransport, ReqwestTransport, ScriptedTransport};

// Re-export the auth and model crates this client is used with
pub use kraken_auth::{Credentials, NonceGenerator};
pub use kraken_models as models;
pub use kraken_models::{
    ApiError, ApiResponse, Asset, AssetPair, Balance, InfoLevel, OpenOrders, ServerTime, Severity,
    TradeBalance,
};
