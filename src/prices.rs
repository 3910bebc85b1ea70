//! Aggregation façade over the configured price source.

use chrono::Utc;
use std::sync::Arc;

use crate::core::model::{Category, PriceSnapshot};
use crate::core::price::PriceSource;

/// The single entry point the HTTP layer calls for price data. The source
/// strategy is selected once at startup; requests only project categories
/// and stamp the snapshot.
pub struct PriceService {
    source: Arc<dyn PriceSource>,
}

impl PriceService {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        PriceService { source }
    }

    /// Builds a fresh snapshot for the requested category selection.
    /// `lastUpdate` is the UTC instant of this call, whether the data came
    /// from a live upstream or from the static fallbacks.
    pub async fn get_prices(&self, category: Category) -> PriceSnapshot {
        let mut board = self.source.fetch_prices().await;
        board.truncate_caps();

        PriceSnapshot {
            gold: category.includes_gold().then_some(board.gold),
            currency: category.includes_currency().then_some(board.currency),
            last_update: Utc::now(),
        }
    }
}
