//! Data models for the Kraken REST API
//!
//! This crate holds everything that crosses the wire: the standard response
//! envelope, the structured error records Kraken encodes into its error
//! strings, and the typed models for the endpoints the client exposes.
//! It has no HTTP or runtime dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`ApiResponse`] - the `{ "error": [...], "result": ... }` envelope
//! - [`ApiError`], [`Severity`] - structured error records
//! - [`Asset`], [`AssetPair`], [`InfoLevel`] - reference data
//! - [`ServerTime`] - server clock with RFC-1123 conversion
//! - [`Balance`], [`TradeBalance`], [`OpenOrders`] - account data

pub mod account;
pub mod asset;
pub mod error;
pub mod pair;
pub mod response;
pub mod time;

pub use account::{Balance, OpenOrder, OpenOrders, OrderDescription, TradeBalance};
pub use asset::Asset;
pub use error::{decode_errors, ApiError, Severity};
pub use pair::{AssetPair, InfoLevel};
pub use response::ApiResponse;
pub use time::ServerTime;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
