//! Private account endpoints
//!
//! These endpoints require credentials; each one marshals its parameters and
//! goes through `query_private` for nonce injection, signing and error
//! decoding.

use crate::client::{decode_result, KrakenClient};
use crate::error::RestResult;
use kraken_models::{Balance, OpenOrders, TradeBalance};
use tracing::instrument;

impl KrakenClient {
    /// Get the account balance per asset
    #[instrument(skip(self))]
    pub async fn balance(&self) -> RestResult<Balance> {
        let raw = self.query_private("Balance", &[]).await?;
        decode_result(&raw)
    }

    /// Get the trade balance (margin summary).
    ///
    /// # Arguments
    /// * `asset` - Base asset the summary is denominated in (server default
    ///   when omitted)
    #[instrument(skip(self))]
    pub async fn trade_balance(&self, asset: Option<&str>) -> RestResult<TradeBalance> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(asset) = asset {
            params.push(("asset", asset));
        }

        let raw = self.query_private("TradeBalance", &params).await?;
        decode_result(&raw)
    }

    /// Get all open orders.
    ///
    /// # Arguments
    /// * `include_trades` - Include trade ids in the output
    /// * `userref` - Restrict to orders placed with this user reference id
    #[instrument(skip(self))]
    pub async fn open_orders(
        &self,
        include_trades: bool,
        userref: Option<&str>,
    ) -> RestResult<OpenOrders> {
        let mut params: Vec<(&str, &str)> =
            vec![("trades", if include_trades { "true" } else { "false" })];
        if let Some(userref) = userref {
            params.push(("userref", userref));
        }

        let raw = self.query_private("OpenOrders", &params).await?;
        decode_result(&raw)
    }
}
