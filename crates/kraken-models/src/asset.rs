//! Tradable asset model

use serde::Deserialize;

/// One asset from the `Assets` endpoint.
///
/// The wire format is a map keyed by Kraken's internal asset code
/// (e.g. `ZEUR`); each value carries the short name in `altname`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    /// Asset class, e.g. `currency`
    #[serde(rename = "aclass")]
    pub class: String,
    /// Short name, e.g. `EUR` or `XBT`
    #[serde(rename = "altname")]
    pub name: String,
    /// Scaling decimal places
    pub decimals: u32,
    /// Decimal places shown for display
    pub display_decimals: u32,
}
