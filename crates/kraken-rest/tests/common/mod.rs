//! Common test fixtures for the integration tests
//!
//! Responses are the exchange's envelope shape, scripted per (URL, body)
//! through `ScriptedTransport` instead of the network.

use kraken_rest::{ClientConfig, KrakenClient, ScriptedTransport};
use std::sync::Arc;

/// Base64 secret from Kraken's API documentation signing example
pub const TEST_SECRET: &str =
    "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==";

/// `Assets` response: three currencies keyed by internal code
pub const ASSETS_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBT": {"aclass": "currency", "altname": "XBT", "decimals": 10, "display_decimals": 5},
        "ZEUR": {"aclass": "currency", "altname": "EUR", "decimals": 4, "display_decimals": 2},
        "ZUSD": {"aclass": "currency", "altname": "USD", "decimals": 4, "display_decimals": 4}
    }
}"#;

/// `AssetPairs` response: one fully resolvable pair, one with a quote
/// currency missing from the asset list
pub const ASSET_PAIRS_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBTZEUR": {
            "altname": "XBTEUR",
            "base": "XXBT",
            "quote": "ZEUR",
            "lot": "unit",
            "pair_decimals": 1,
            "lot_decimals": 8,
            "lot_multiplier": 1,
            "leverage_buy": [2, 3],
            "leverage_sell": [2, 3],
            "fees": [[0, 0.26], [50000, 0.24]],
            "fees_maker": [[0, 0.16]],
            "fee_volume_currency": "ZUSD",
            "margin_call": 80,
            "margin_stop": 40
        },
        "XXBTZJPY": {
            "altname": "XBTJPY",
            "base": "XXBT",
            "quote": "ZJPY",
            "lot": "unit",
            "pair_decimals": 0,
            "lot_decimals": 8,
            "lot_multiplier": 1,
            "fees": [[0, 0.26]],
            "fee_volume_currency": "ZUSD",
            "margin_call": 80,
            "margin_stop": 40
        }
    }
}"#;

/// `Time` response with a fixed RFC-1123 instant
pub const TIME_RESPONSE: &str = r#"{
    "error": [],
    "result": {"unixtime": 1489330123, "rfc1123": "Sun, 12 Mar 2017 14:48:43 +0000"}
}"#;

/// Error-only response for a mistyped method name
pub const UNKNOWN_METHOD_RESPONSE: &str = r#"{"error":["EGeneral:Unknown method"]}"#;

/// `Balance` response
pub const BALANCE_RESPONSE: &str = r#"{
    "error": [],
    "result": {"ZEUR": "1258.4530", "XXBT": "0.5000000000"}
}"#;

/// `TradeBalance` response
pub const TRADE_BALANCE_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "eb": "3224.6000", "tb": "3224.6000", "m": "0.0000", "n": "0.0000",
        "c": "0.0000", "v": "0.0000", "e": "3224.6000", "mf": "3224.6000"
    }
}"#;

/// `OpenOrders` response with a single open limit order
pub const OPEN_ORDERS_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "open": {
            "OQCLML-BW3P3-BUCMWZ": {
                "refid": null,
                "userref": 0,
                "status": "open",
                "opentm": 1688666559.8974,
                "descr": {
                    "pair": "XBTUSD",
                    "type": "buy",
                    "ordertype": "limit",
                    "price": "27500.0",
                    "price2": "0",
                    "leverage": "none",
                    "order": "buy 1.25000000 XBTUSD @ limit 27500.0"
                },
                "vol": "1.25000000",
                "vol_exec": "0.00000000",
                "cost": "0.00000",
                "fee": "0.00000",
                "price": "0.00000",
                "misc": "",
                "oflags": "fciq"
            }
        }
    }
}"#;

/// URL of a public method on the default base
pub fn public_url(method: &str) -> String {
    format!("https://api.kraken.com/0/public/{}", method)
}

/// URL of a private method on the default base
pub fn private_url(method: &str) -> String {
    format!("https://api.kraken.com/0/private/{}", method)
}

/// Client over a fresh scripted transport, default configuration
pub fn scripted_client() -> (KrakenClient, Arc<ScriptedTransport>) {
    scripted_client_with(ClientConfig::default())
}

/// Client over a fresh scripted transport with the given configuration
pub fn scripted_client_with(config: ClientConfig) -> (KrakenClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::new());
    let client = KrakenClient::with_transport(config, transport.clone());
    (client, transport)
}
