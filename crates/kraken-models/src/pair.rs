//! Asset pair model and the `AssetPairs` info level

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::asset::Asset;

/// Which detail level to request from `AssetPairs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoLevel {
    /// Everything (the only level the cache holds)
    #[default]
    All,
    /// Leverage schedules only
    Leverage,
    /// Fee schedules only
    Fees,
    /// Margin levels only
    Margin,
}

impl InfoLevel {
    /// Value of the `info` request parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::All => "info",
            Self::Leverage => "leverage",
            Self::Fees => "fees",
            Self::Margin => "margin",
        }
    }
}

/// One tradable pair from the `AssetPairs` endpoint.
///
/// `base_alias`/`quote_alias` carry Kraken's internal asset codes
/// (e.g. `XXBT`); the resolved [`Asset`] links are filled in by the client
/// from the asset list and stay `None` when the alias cannot be matched.
/// Every field except `name` is defaulted because non-`All` info levels
/// return partial objects.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPair {
    /// Pair short name, e.g. `XBTEUR`
    #[serde(rename = "altname")]
    pub name: String,
    /// Base asset code, e.g. `XXBT`
    #[serde(rename = "base", default)]
    pub base_alias: String,
    /// Base asset resolved against the asset list
    #[serde(skip)]
    pub base: Option<Asset>,
    /// Quote asset code, e.g. `ZEUR`
    #[serde(rename = "quote", default)]
    pub quote_alias: String,
    /// Quote asset resolved against the asset list
    #[serde(skip)]
    pub quote: Option<Asset>,
    /// Volume lot size
    #[serde(default)]
    pub lot: Option<String>,
    /// Price decimal places
    #[serde(rename = "pair_decimals", default)]
    pub decimals: u32,
    /// Lot decimal places
    #[serde(default)]
    pub lot_decimals: u32,
    /// Lot multiplier applied to volume
    #[serde(default)]
    pub lot_multiplier: u32,
    /// Margin amounts available when buying
    #[serde(default)]
    pub leverage_buy: Vec<u32>,
    /// Margin amounts available when selling
    #[serde(default)]
    pub leverage_sell: Vec<u32>,
    /// Taker fee schedule as [volume, percent] tiers
    #[serde(default)]
    pub fees: Vec<Vec<Decimal>>,
    /// Maker fee schedule as [volume, percent] tiers
    #[serde(rename = "fees_maker", default)]
    pub maker_fees: Vec<Vec<Decimal>>,
    /// Asset code the fee volume is tracked in
    #[serde(rename = "fee_volume_currency", default)]
    pub fee_volume_currency_alias: Option<String>,
    /// Margin call level in percent
    #[serde(default)]
    pub margin_call: u32,
    /// Margin stop-out level in percent
    #[serde(default)]
    pub margin_stop: u32,
}
