//! Supplementary currency rate abstractions and synthesis.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::core::catalog::MAJOR_CURRENCIES;
use crate::core::model::{PriceItem, UNIT};
use crate::core::price::FetchError;

/// Reference USD/TRY rate the derived change percentage is computed
/// against. Every synthesized currency in one call shares the same change
/// value because of this constant; kept as-is pending product review.
pub const REFERENCE_USD_TRY: f64 = 42.0;

/// Bid/ask spread applied to synthesized quotes.
const BID_FACTOR: f64 = 0.995;
const ASK_FACTOR: f64 = 1.005;

/// A source of unit exchange rates against USD.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn usd_rates(&self) -> Result<HashMap<String, f64>, FetchError>;
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Synthesizes TRY-denominated quotes for the fixed major-currency roster
/// from a USD-based rate table. Ids continue sequentially from `next_id` so
/// the caller can append the result to an existing currency list.
pub fn synthesize_currencies(rates: &HashMap<String, f64>, next_id: u32) -> Vec<PriceItem> {
    let base_rate = rates.get("TRY").copied().unwrap_or(REFERENCE_USD_TRY);
    let change = round2((base_rate - REFERENCE_USD_TRY) / REFERENCE_USD_TRY * 100.0);

    MAJOR_CURRENCIES
        .iter()
        .enumerate()
        .map(|(i, (code, symbol, default_rate))| {
            let (buy, sell) = if *code == "USD" {
                (base_rate * BID_FACTOR, base_rate * ASK_FACTOR)
            } else {
                let usd_rate = rates.get(*code).copied().unwrap_or(*default_rate);
                let per_unit = if usd_rate > 0.0 { 1.0 / usd_rate } else { 1.0 };
                (
                    per_unit * base_rate * BID_FACTOR,
                    per_unit * base_rate * ASK_FACTOR,
                )
            };

            PriceItem {
                id: next_id + i as u32,
                name: code.to_string(),
                name_en: code.to_string(),
                buy: round2(buy),
                sell: round2(sell),
                change,
                symbol: Some(symbol.to_string()),
                unit: UNIT.to_string(),
            }
        })
        .collect()
}
