//! Canonical price types shared by all providers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pricing currency for every quote served by this backend.
pub const UNIT: &str = "TRY";

/// Maximum number of gold rows in a snapshot.
pub const GOLD_CAP: usize = 10;
/// Maximum number of currency rows in a snapshot.
pub const CURRENCY_CAP: usize = 11;

/// A single normalized gold or currency quote, independent of the upstream
/// schema it was produced from.
///
/// `id` is assigned by insertion order (1-based, per category, per call);
/// it is not a stable upstream identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceItem {
    pub id: u32,
    pub name: String,
    pub name_en: String,
    pub buy: f64,
    pub sell: f64,
    pub change: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub unit: String,
}

/// Both category lists as produced by a price source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBoard {
    pub gold: Vec<PriceItem>,
    pub currency: Vec<PriceItem>,
}

impl PriceBoard {
    /// Enforces the fixed list caps. Excess entries are truncated in
    /// production order, never reordered or prioritized.
    pub fn truncate_caps(&mut self) {
        self.gold.truncate(GOLD_CAP);
        self.currency.truncate(CURRENCY_CAP);
    }
}

/// The aggregation result returned to HTTP callers. Created fresh on every
/// request and never persisted; absent categories are omitted from the JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<Vec<PriceItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Vec<PriceItem>>,
    pub last_update: DateTime<Utc>,
}

/// Category selector accepted by the prices endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Gold,
    Currency,
}

impl Category {
    pub fn includes_gold(self) -> bool {
        matches!(self, Category::All | Category::Gold)
    }

    pub fn includes_currency(self) -> bool {
        matches!(self, Category::All | Category::Currency)
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    // Unrecognized selectors degrade to `All` rather than erroring.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "gold" => Category::Gold,
            "currency" => Category::Currency,
            _ => Category::All,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> PriceItem {
        PriceItem {
            id,
            name: "HAS ALTIN".to_string(),
            name_en: "PURE GOLD".to_string(),
            buy: 5807.5,
            sell: 5858.7,
            change: 0.74,
            symbol: None,
            unit: UNIT.to_string(),
        }
    }

    #[test]
    fn test_gold_item_serialization_omits_symbol() {
        let json = serde_json::to_value(item(1)).unwrap();
        assert_eq!(json["nameEn"], "PURE GOLD");
        assert_eq!(json["unit"], "TRY");
        assert!(json.get("symbol").is_none());
    }

    #[test]
    fn test_currency_item_serialization_keeps_symbol() {
        let mut usd = item(1);
        usd.symbol = Some("$".to_string());
        let json = serde_json::to_value(usd).unwrap();
        assert_eq!(json["symbol"], "$");
    }

    #[test]
    fn test_truncate_caps() {
        let mut board = PriceBoard {
            gold: (1..=14).map(item).collect(),
            currency: (1..=13).map(item).collect(),
        };
        board.truncate_caps();
        assert_eq!(board.gold.len(), GOLD_CAP);
        assert_eq!(board.currency.len(), CURRENCY_CAP);
        // Natural production order survives truncation
        assert_eq!(board.gold.last().unwrap().id, 10);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("gold".parse::<Category>().unwrap(), Category::Gold);
        assert_eq!("currency".parse::<Category>().unwrap(), Category::Currency);
        assert_eq!("all".parse::<Category>().unwrap(), Category::All);
        assert_eq!("bogus".parse::<Category>().unwrap(), Category::All);
    }

    #[test]
    fn test_snapshot_omits_absent_categories() {
        let snapshot = PriceSnapshot {
            gold: Some(vec![item(1)]),
            currency: None,
            last_update: Utc::now(),
        };
        let json = serde_json::to_value(snapshot).unwrap();
        assert!(json.get("gold").is_some());
        assert!(json.get("currency").is_none());
        assert!(json.get("lastUpdate").is_some());
    }
}
