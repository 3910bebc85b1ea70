//! Adapter for the combined Harem Altın price feed.
//!
//! One authenticated call returns gold and currency records together as
//! locale-formatted strings. Records are mapped through the catalog name
//! tables; unmatched keys are dropped. The supplementary rate source is
//! merged into the currency list before the caps are applied.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::core::catalog::{self, HAREM_CURRENCY_NAMES, HAREM_GOLD_NAMES};
use crate::core::currency::{RateSource, synthesize_currencies};
use crate::core::model::{PriceBoard, PriceItem, UNIT};
use crate::core::numeric::parse_locale_number;
use crate::core::price::{FetchError, PriceSource};
use crate::providers::util::rapidapi_host;
use crate::providers::{PRIMARY_TIMEOUT, USER_AGENT};

pub struct HaremProvider {
    base_url: String,
    host: String,
    api_key: String,
    rates: Arc<dyn RateSource>,
}

impl HaremProvider {
    pub fn new(base_url: &str, api_key: &str, rates: Arc<dyn RateSource>) -> Self {
        HaremProvider {
            base_url: base_url.to_string(),
            host: rapidapi_host(base_url),
            api_key: api_key.to_string(),
            rates,
        }
    }

    async fn fetch_live(&self) -> Result<PriceBoard, FetchError> {
        let url = format!("{}/harem_altin/prices", self.base_url);
        debug!("Requesting combined price feed from {}", url);

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
        let data: HaremResponse = serde_json::from_str(&text)?;
        if !data.success {
            return Err(FetchError::Upstream(
                data.message.unwrap_or_else(|| "no message".to_string()),
            ));
        }

        let mut board = format_records(&data.data);

        // Merger failure only costs the synthesized currencies; the primary
        // lists are served regardless.
        match self.rates.usd_rates().await {
            Ok(rates) => {
                let next_id = board.currency.len() as u32 + 1;
                board
                    .currency
                    .extend(synthesize_currencies(&rates, next_id));
            }
            Err(e) => {
                warn!(error = %e, "rate source unavailable, skipping synthesized currencies");
            }
        }

        board.truncate_caps();
        Ok(board)
    }
}

#[derive(Debug, Deserialize)]
struct HaremResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Vec<HaremRecord>,
}

#[derive(Debug, Deserialize)]
struct HaremRecord {
    #[serde(default)]
    key: String,
    #[serde(default)]
    buy: String,
    #[serde(default)]
    sell: String,
    #[serde(default)]
    percent: String,
}

fn format_records(records: &[HaremRecord]) -> PriceBoard {
    let mut board = PriceBoard::default();

    for record in records {
        let buy = parse_locale_number(&record.buy, false);
        let sell = parse_locale_number(&record.sell, false);
        let change = parse_locale_number(&record.percent, true);

        if let Some((_, name, name_en)) = HAREM_GOLD_NAMES
            .iter()
            .find(|(key, _, _)| *key == record.key)
        {
            board.gold.push(PriceItem {
                id: board.gold.len() as u32 + 1,
                name: (*name).to_string(),
                name_en: (*name_en).to_string(),
                buy,
                sell,
                change,
                symbol: None,
                unit: UNIT.to_string(),
            });
        } else if let Some((_, name, name_en, symbol)) = HAREM_CURRENCY_NAMES
            .iter()
            .find(|(key, _, _, _)| *key == record.key)
        {
            board.currency.push(PriceItem {
                id: board.currency.len() as u32 + 1,
                name: (*name).to_string(),
                name_en: (*name_en).to_string(),
                buy,
                sell,
                change,
                symbol: Some((*symbol).to_string()),
                unit: UNIT.to_string(),
            });
        }
        // Keys matching neither table are dropped
    }

    board
}

#[async_trait]
impl PriceSource for HaremProvider {
    #[instrument(name = "HaremPriceFetch", skip(self))]
    async fn fetch_prices(&self) -> PriceBoard {
        match self.fetch_live().await {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, "combined feed unavailable, serving fallback snapshot");
                catalog::fallback_board_harem()
            }
        }
    }
}
