//! Adapter for the split gold/currency feeds.
//!
//! Two independent endpoints return keyed objects with plain numeric
//! fields. Each operation walks its static key table in order, skips absent
//! keys, and falls back to its own static list on failure; a gold outage
//! never affects the currency list and vice versa.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use crate::core::catalog::{
    self, DOVIZ_CURRENCY_KEYS, DOVIZ_GOLD_KEYS, DOVIZ_KG_KEYS,
};
use crate::core::model::{PriceBoard, PriceItem, UNIT};
use crate::core::price::{FetchError, PriceSource};
use crate::providers::util::rapidapi_host;
use crate::providers::{PRIMARY_TIMEOUT, USER_AGENT};

pub struct DovizProvider {
    base_url: String,
    host: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SpotQuote {
    #[serde(default)]
    alis: f64,
    #[serde(default)]
    satis: f64,
    #[serde(default)]
    degisim: f64,
}

impl DovizProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        DovizProvider {
            base_url: base_url.to_string(),
            host: rapidapi_host(base_url),
            api_key: api_key.to_string(),
        }
    }

    async fn fetch_feed(
        &self,
        endpoint: &str,
    ) -> Result<HashMap<String, serde_json::Value>, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting spot feed from {}", url);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(PRIMARY_TIMEOUT)
            .build()?;
        let response = client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Gold quotes from `/altin`; falls back to the static gold list on any
    /// failure, independent of the currency operation.
    pub async fn fetch_gold(&self) -> Vec<PriceItem> {
        match self.fetch_feed("/altin").await {
            Ok(data) => {
                let mut items = Vec::new();
                for (key, name, name_en) in DOVIZ_GOLD_KEYS {
                    let Some(quote) = quote_for(&data, key) else {
                        continue;
                    };
                    items.push(PriceItem {
                        id: items.len() as u32 + 1,
                        name: (*name).to_string(),
                        name_en: (*name_en).to_string(),
                        buy: quote.alis,
                        sell: quote.satis,
                        change: quote.degisim,
                        symbol: None,
                        unit: UNIT.to_string(),
                    });
                }
                items
            }
            Err(e) => {
                warn!(error = %e, "gold feed unavailable, serving fallback list");
                catalog::fallback_gold_doviz()
            }
        }
    }

    /// Currency quotes from `/doviz`, with the weight-based entries
    /// appended when the body carries them.
    pub async fn fetch_rates(&self) -> Vec<PriceItem> {
        match self.fetch_feed("/doviz").await {
            Ok(data) => {
                let mut items = Vec::new();
                for (key, name, name_en, symbol) in
                    DOVIZ_CURRENCY_KEYS.iter().chain(DOVIZ_KG_KEYS)
                {
                    let Some(quote) = quote_for(&data, key) else {
                        continue;
                    };
                    items.push(PriceItem {
                        id: items.len() as u32 + 1,
                        name: (*name).to_string(),
                        name_en: (*name_en).to_string(),
                        buy: quote.alis,
                        sell: quote.satis,
                        change: quote.degisim,
                        symbol: Some((*symbol).to_string()),
                        unit: UNIT.to_string(),
                    });
                }
                items
            }
            Err(e) => {
                warn!(error = %e, "currency feed unavailable, serving fallback list");
                catalog::fallback_currency_doviz()
            }
        }
    }
}

// A key present with an unexpected shape is treated like a missing key:
// that single item is omitted, not the whole category.
fn quote_for(data: &HashMap<String, serde_json::Value>, key: &str) -> Option<SpotQuote> {
    data.get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

#[async_trait]
impl PriceSource for DovizProvider {
    #[instrument(name = "DovizPriceFetch", skip(self))]
    async fn fetch_prices(&self) -> PriceBoard {
        // No data dependency between the two feeds; fetch them together.
        let (gold, currency) = futures::join!(self.fetch_gold(), self.fetch_rates());
        PriceBoard { gold, currency }
    }
}
