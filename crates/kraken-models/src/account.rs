//! Account data models for the private endpoints

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Result of `Balance`: asset code to amount
pub type Balance = HashMap<String, Decimal>;

/// Result of `TradeBalance`: the account's margin summary
#[derive(Debug, Clone, Deserialize)]
pub struct TradeBalance {
    /// Combined balance of all currencies, in the base asset
    #[serde(rename = "eb")]
    pub equivalent_balance: Decimal,
    /// Combined balance of currencies with open positions
    #[serde(rename = "tb")]
    pub trade_balance: Decimal,
    /// Margin amount of open positions
    #[serde(rename = "m")]
    pub margin: Decimal,
    /// Unrealized net profit/loss of open positions
    #[serde(rename = "n")]
    pub unrealized_pnl: Decimal,
    /// Cost basis of open positions
    #[serde(rename = "c")]
    pub cost_basis: Decimal,
    /// Current floating valuation of open positions
    #[serde(rename = "v")]
    pub valuation: Decimal,
    /// Trade balance plus unrealized profit/loss
    #[serde(rename = "e")]
    pub equity: Decimal,
    /// Equity minus the initial margin of open positions
    #[serde(rename = "mf")]
    pub free_margin: Decimal,
    /// Equity over margin, in percent; absent without open positions
    #[serde(rename = "ml", default)]
    pub margin_level: Option<Decimal>,
}

/// Result of `OpenOrders`
#[derive(Debug, Clone, Deserialize)]
pub struct OpenOrders {
    /// Open orders keyed by transaction id
    pub open: HashMap<String, OpenOrder>,
}

/// One open order
#[derive(Debug, Clone, Deserialize)]
pub struct OpenOrder {
    /// Referral order transaction id
    #[serde(default)]
    pub refid: Option<String>,
    /// User reference id the order was placed with
    #[serde(default)]
    pub userref: Option<i64>,
    /// Order status (`pending`, `open`, ...)
    pub status: String,
    /// Unix timestamp the order was opened at
    #[serde(rename = "opentm")]
    pub open_time: f64,
    /// Order description
    #[serde(rename = "descr")]
    pub description: OrderDescription,
    /// Order volume
    #[serde(rename = "vol")]
    pub volume: Decimal,
    /// Executed volume
    #[serde(rename = "vol_exec")]
    pub executed_volume: Decimal,
    /// Total cost so far
    pub cost: Decimal,
    /// Total fee so far
    pub fee: Decimal,
    /// Average execution price
    pub price: Decimal,
    /// Miscellaneous flags, comma delimited
    #[serde(default)]
    pub misc: String,
    /// Order flags, comma delimited
    #[serde(default)]
    pub oflags: String,
    /// Trade ids, when requested with the trades flag
    #[serde(default)]
    pub trades: Vec<String>,
}

/// Human-oriented description attached to an order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDescription {
    /// Pair short name
    pub pair: String,
    /// `buy` or `sell`
    #[serde(rename = "type")]
    pub side: String,
    /// Order type, e.g. `limit`
    #[serde(rename = "ordertype")]
    pub order_type: String,
    /// Primary price
    pub price: Decimal,
    /// Secondary price
    #[serde(default)]
    pub price2: Option<Decimal>,
    /// Leverage applied
    #[serde(default)]
    pub leverage: Option<String>,
    /// Full order description
    #[serde(default)]
    pub order: String,
}
