//! Fully-blocking call style
//!
//! [`BlockingClient`] mirrors the async surface method for method by waiting
//! on the async call on an owned runtime. Because the wait returns the async
//! call's own `Result`, every failure keeps its original [`RestError`]
//! identity; nothing gets re-wrapped on the way out.
//!
//! Must not be used from inside an async context: `block_on` would panic
//! there. Use [`KrakenClient`] directly instead.

use crate::client::KrakenClient;
use crate::config::ClientConfig;
use crate::error::RestResult;
use crate::transport::HttpTransport;
use chrono::{DateTime, Utc};
use kraken_auth::Credentials;
use kraken_models::{Asset, AssetPair, Balance, InfoLevel, OpenOrders, ServerTime, TradeBalance};
use std::sync::Arc;

/// Blocking mirror of [`KrakenClient`]
#[derive(Debug)]
pub struct BlockingClient {
    inner: KrakenClient,
    runtime: tokio::runtime::Runtime,
}

impl BlockingClient {
    /// Create a blocking client without credentials
    pub fn new() -> RestResult<Self> {
        Self::from_client(KrakenClient::new())
    }

    /// Create a blocking client with credentials for private endpoints
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::from_client(KrakenClient::with_credentials(credentials))
    }

    /// Create a blocking client from a full configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        Self::from_client(KrakenClient::with_config(config))
    }

    /// Create a blocking client over a custom transport
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> RestResult<Self> {
        Self::from_client(KrakenClient::with_transport(config, transport))
    }

    /// Wrap an existing async client
    pub fn from_client(inner: KrakenClient) -> RestResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self { inner, runtime })
    }

    /// The wrapped async client
    pub fn async_client(&self) -> &KrakenClient {
        &self.inner
    }

    /// Blocking [`KrakenClient::query_public`]
    pub fn query_public(&self, method: &str, params: &[(&str, &str)]) -> RestResult<String> {
        self.runtime.block_on(self.inner.query_public(method, params))
    }

    /// Blocking [`KrakenClient::query_private`]
    pub fn query_private(&self, method: &str, params: &[(&str, &str)]) -> RestResult<String> {
        self.runtime.block_on(self.inner.query_private(method, params))
    }

    /// Blocking [`KrakenClient::server_time`]
    pub fn server_time(&self) -> RestResult<ServerTime> {
        self.runtime.block_on(self.inner.server_time())
    }

    /// Blocking [`KrakenClient::server_datetime`]
    pub fn server_datetime(&self) -> RestResult<DateTime<Utc>> {
        self.runtime.block_on(self.inner.server_datetime())
    }

    /// Blocking [`KrakenClient::assets`]
    pub fn assets(&self) -> RestResult<Arc<Vec<Asset>>> {
        self.runtime.block_on(self.inner.assets())
    }

    /// Blocking [`KrakenClient::assets_filtered`]
    pub fn assets_filtered(&self, names: &str) -> RestResult<Vec<Asset>> {
        self.runtime.block_on(self.inner.assets_filtered(names))
    }

    /// Blocking [`KrakenClient::assets_fresh`]
    pub fn assets_fresh(&self) -> RestResult<Vec<Asset>> {
        self.runtime.block_on(self.inner.assets_fresh())
    }

    /// Blocking [`KrakenClient::asset_pairs`]
    pub fn asset_pairs(&self) -> RestResult<Arc<Vec<AssetPair>>> {
        self.runtime.block_on(self.inner.asset_pairs())
    }

    /// Blocking [`KrakenClient::asset_pairs_filtered`]
    pub fn asset_pairs_filtered(&self, pairs: &str) -> RestResult<Vec<AssetPair>> {
        self.runtime.block_on(self.inner.asset_pairs_filtered(pairs))
    }

    /// Blocking [`KrakenClient::asset_pairs_fresh`]
    pub fn asset_pairs_fresh(&self, level: InfoLevel) -> RestResult<Vec<AssetPair>> {
        self.runtime.block_on(self.inner.asset_pairs_fresh(level))
    }

    /// Blocking [`KrakenClient::balance`]
    pub fn balance(&self) -> RestResult<Balance> {
        self.runtime.block_on(self.inner.balance())
    }

    /// Blocking [`KrakenClient::trade_balance`]
    pub fn trade_balance(&self, asset: Option<&str>) -> RestResult<TradeBalance> {
        self.runtime.block_on(self.inner.trade_balance(asset))
    }

    /// Blocking [`KrakenClient::open_orders`]
    pub fn open_orders(&self, include_trades: bool, userref: Option<&str>) -> RestResult<OpenOrders> {
        self.runtime
            .block_on(self.inner.open_orders(include_trades, userref))
    }
}
