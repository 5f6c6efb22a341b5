//! Public reference-data and server-time endpoints
//!
//! These endpoints don't require authentication. Assets and asset pairs are
//! served through the reference-data cache; the `_fresh` variants always hit
//! the exchange and leave the cache untouched, so a parameterized fetch can
//! never corrupt the unfiltered entry the cache holds.

use crate::client::{decode_result, KrakenClient};
use crate::error::{RestError, RestResult};
use chrono::{DateTime, Utc};
use kraken_models::{Asset, AssetPair, InfoLevel, ServerTime};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

impl KrakenClient {
    /// Get the server time
    #[instrument(skip(self))]
    pub async fn server_time(&self) -> RestResult<ServerTime> {
        let raw = self.query_public("Time", &[]).await?;
        decode_result(&raw)
    }

    /// Get the server time as a UTC instant, parsed from its RFC-1123 form
    #[instrument(skip(self))]
    pub async fn server_datetime(&self) -> RestResult<DateTime<Utc>> {
        let time = self.server_time().await?;
        time.to_datetime()
            .map_err(|e| RestError::MalformedResponse(format!("bad rfc1123 timestamp: {}", e)))
    }

    /// Get all assets, served from the cache while fresh
    #[instrument(skip(self))]
    pub async fn assets(&self) -> RestResult<Arc<Vec<Asset>>> {
        if let Some(cached) = self.cache.assets() {
            return Ok(cached);
        }

        let fetched = Arc::new(self.fetch_assets().await?);
        self.cache.store_assets(Arc::clone(&fetched));
        Ok(fetched)
    }

    /// Get the assets named in a comma-delimited list.
    ///
    /// Filtering happens client-side against the cached full set; a blank
    /// list returns everything.
    #[instrument(skip(self))]
    pub async fn assets_filtered(&self, names: &str) -> RestResult<Vec<Asset>> {
        let all = self.assets().await?;
        if names.trim().is_empty() {
            return Ok(all.as_ref().clone());
        }

        let wanted: Vec<&str> = names.split(',').map(str::trim).collect();
        Ok(all
            .iter()
            .filter(|asset| wanted.contains(&asset.name.as_str()))
            .cloned()
            .collect())
    }

    /// Get all assets directly from the exchange, bypassing the cache.
    ///
    /// The cached entry is not updated.
    #[instrument(skip(self))]
    pub async fn assets_fresh(&self) -> RestResult<Vec<Asset>> {
        self.fetch_assets().await
    }

    /// Get all asset pairs at full detail, served from the cache while fresh
    #[instrument(skip(self))]
    pub async fn asset_pairs(&self) -> RestResult<Arc<Vec<AssetPair>>> {
        if let Some(cached) = self.cache.pairs() {
            return Ok(cached);
        }

        let fetched = Arc::new(self.fetch_asset_pairs(InfoLevel::All).await?);
        self.cache.store_pairs(Arc::clone(&fetched));
        Ok(fetched)
    }

    /// Get the asset pairs named in a comma-delimited list (e.g. `XBTEUR`).
    ///
    /// Filtering happens client-side against the cached full set; a blank
    /// list returns everything.
    #[instrument(skip(self))]
    pub async fn asset_pairs_filtered(&self, pairs: &str) -> RestResult<Vec<AssetPair>> {
        let all = self.asset_pairs().await?;
        if pairs.trim().is_empty() {
            return Ok(all.as_ref().clone());
        }

        let wanted: Vec<&str> = pairs.split(',').map(str::trim).collect();
        Ok(all
            .iter()
            .filter(|pair| wanted.contains(&pair.name.as_str()))
            .cloned()
            .collect())
    }

    /// Get asset pairs at the requested info level directly from the
    /// exchange, bypassing the cache.
    ///
    /// The cached entry only ever holds the full-detail response, so this
    /// fetch does not update it.
    #[instrument(skip(self))]
    pub async fn asset_pairs_fresh(&self, level: InfoLevel) -> RestResult<Vec<AssetPair>> {
        self.fetch_asset_pairs(level).await
    }

    async fn fetch_assets(&self) -> RestResult<Vec<Asset>> {
        let raw = self.query_public("Assets", &[]).await?;
        let by_code: HashMap<String, Asset> = decode_result(&raw)?;
        Ok(by_code.into_values().collect())
    }

    async fn fetch_asset_pairs(&self, level: InfoLevel) -> RestResult<Vec<AssetPair>> {
        let raw = self
            .query_public("AssetPairs", &[("info", level.query_value())])
            .await?;
        let by_code: HashMap<String, AssetPair> = decode_result(&raw)?;

        // Pair aliases use Kraken's internal codes; link them to the asset
        // list (itself cache-eligible) by short name.
        let assets = self.assets().await?;
        let mut pairs = Vec::with_capacity(by_code.len());
        for mut pair in by_code.into_values() {
            pair.base = resolve_alias(&assets, &pair.base_alias);
            pair.quote = resolve_alias(&assets, &pair.quote_alias);
            pairs.push(pair);
        }

        Ok(pairs)
    }
}

/// Match an internal asset code against the asset list.
///
/// The leading class character is stripped (`ZEUR` → `EUR`) and the remainder
/// compared with asset short names. Blank aliases, or aliases with nothing
/// left after the strip, resolve to `None` rather than failing the fetch.
fn resolve_alias(assets: &[Asset], alias: &str) -> Option<Asset> {
    let mut chars = alias.trim().chars();
    chars.next()?;
    let short = chars.as_str();
    if short.is_empty() {
        return None;
    }

    assets.iter().find(|asset| asset.name == short).cloned()
}
