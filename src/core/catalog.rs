//! Shared static lookup tables and fallback snapshots.
//!
//! Both provider adapters and their fallbacks draw from the tables here, so
//! the live key mappings and the static snapshot values cannot drift apart.

use crate::core::model::{PriceBoard, PriceItem, UNIT};

/// Combined feed: upstream record key -> (name, name_en). Keys not listed
/// here (or in [`HAREM_CURRENCY_NAMES`]) are dropped from the snapshot.
pub const HAREM_GOLD_NAMES: &[(&str, &str, &str)] = &[
    ("Has Altın", "HAS ALTIN", "PURE GOLD"),
    ("ONS", "ONS", "OUNCE"),
    ("GRAM ALTIN", "GRAM ALTIN", "GRAM GOLD"),
    ("22 AYAR", "22 AYAR", "22 CARAT"),
    ("14 AYAR", "14 AYAR", "14 CARAT"),
    ("ALTIN GÜMÜŞ", "ALTIN GÜMÜŞ", "GOLD SILVER"),
    ("YENİ ÇEYREK", "ÇEYREK ALTIN", "QUARTER GOLD"),
    ("YENİ YARIM", "YARIM ALTIN", "HALF GOLD"),
    ("YENİ TAM", "TAM ALTIN", "FULL GOLD"),
    ("YENİ ATA", "ATA ALTIN", "ATA GOLD"),
    ("ESKİ ÇEYREK", "ESKİ ÇEYREK", "OLD QUARTER"),
    ("ESKİ YARIM", "ESKİ YARIM", "OLD HALF"),
    ("ESKİ TAM", "ESKİ TAM", "OLD FULL"),
    ("ESKİ ATA", "ESKİ ATA", "OLD ATA"),
];

/// Combined feed: upstream record key -> (name, name_en, symbol). The two
/// weight-based quotes are the only currencies carried by the feed itself.
pub const HAREM_CURRENCY_NAMES: &[(&str, &str, &str, &str)] = &[
    ("USD/KG", "USD/KG", "USD/KG", "$"),
    ("EUR/KG", "EUR/KG", "EUR/KG", "€"),
];

/// Split feed `/altin` body: ordered list of expected keys.
pub const DOVIZ_GOLD_KEYS: &[(&str, &str, &str)] = &[
    ("has_altin", "HAS ALTIN", "PURE GOLD"),
    ("ons", "ONS", "OUNCE"),
    ("ceyrek_altin", "ÇEYREK ALTIN", "QUARTER GOLD"),
    ("yarim_altin", "YARIM ALTIN", "HALF GOLD"),
    ("tam_altin", "TAM ALTIN", "FULL GOLD"),
    ("ayar22", "22 AYAR", "22 CARAT"),
    ("gram_altin", "GRAM ALTIN", "GRAM GOLD"),
    ("gumus", "ALTIN GÜMÜŞ", "GOLD SILVER"),
    ("resat", "REŞAT ALTIN", "RESAT GOLD"),
    ("ata", "ATA ALTIN", "ATA GOLD"),
];

/// Split feed `/doviz` body: ordered list of the nine base currencies.
pub const DOVIZ_CURRENCY_KEYS: &[(&str, &str, &str, &str)] = &[
    ("dolar", "USD", "USD", "$"),
    ("euro", "EUR", "EUR", "€"),
    ("sterlin", "GBP", "GBP", "£"),
    ("frank", "CHF", "CHF", "Fr"),
    ("avustralya_dolari", "AUD", "AUD", "$"),
    ("kanada_dolari", "CAD", "CAD", "$"),
    ("suudi_arabistan_riyali", "SAR", "SAR", "ر.س"),
    ("japon_yeni", "JPY", "JPY", "¥"),
    ("kuveyt_dinari", "KWD", "KWD", "KD"),
];

/// Split feed: weight-based quotes appended after the base currencies when
/// the body carries them.
pub const DOVIZ_KG_KEYS: &[(&str, &str, &str, &str)] = &[
    ("usd_kg", "USD/KG", "USD/KG", "$"),
    ("eur_kg", "EUR/KG", "EUR/KG", "€"),
];

/// Supplementary roster: (code, symbol, default USD rate substituted when
/// the fetched table lacks the code).
pub const MAJOR_CURRENCIES: &[(&str, &str, f64)] = &[
    ("USD", "$", 1.0),
    ("EUR", "€", 0.92),
    ("GBP", "£", 0.79),
    ("CHF", "Fr", 0.88),
    ("AUD", "$", 1.54),
    ("CAD", "$", 1.41),
    ("SAR", "ر.س", 3.75),
    ("JPY", "¥", 151.0),
    ("KWD", "KD", 0.31),
];

// Fallback rows: (name, name_en, buy, sell, change).
type GoldRow = (&'static str, &'static str, f64, f64, f64);
// Currency rows additionally carry the display symbol.
type CurrencyRow = (&'static str, &'static str, f64, f64, f64, &'static str);

const FALLBACK_GOLD_HAREM: &[GoldRow] = &[
    ("HAS ALTIN", "PURE GOLD", 5807.50, 5858.70, 0.74),
    ("ONS", "OUNCE", 4239.5, 4239.9, 0.53),
    ("ÇEYREK ALTIN", "QUARTER GOLD", 2389.0, 2398.0, 0.68),
    ("YARIM ALTIN", "HALF GOLD", 4779.0, 4796.0, 0.72),
    ("TAM ALTIN", "FULL GOLD", 9558.0, 9592.0, 0.75),
    ("22 AYAR", "22 CARAT", 5282.82, 5545.77, 4.83),
    ("GRAM ALTIN", "GRAM GOLD", 5778.46, 5876.28, 1.55),
    ("ALTIN GÜMÜŞ", "GOLD SILVER", 70.66, 73.63, 0.59),
    ("ESKİ ÇEYREK", "OLD QUARTER", 9320.0, 9493.0, 0.82),
    ("ATA ALTIN", "ATA GOLD", 9612.0, 9652.0, 0.78),
];

// Same snapshot except row 9, where the split feed quotes REŞAT instead of
// the old quarter coin.
const FALLBACK_GOLD_DOVIZ: &[GoldRow] = &[
    ("HAS ALTIN", "PURE GOLD", 5807.50, 5858.70, 0.74),
    ("ONS", "OUNCE", 4239.5, 4239.9, 0.53),
    ("ÇEYREK ALTIN", "QUARTER GOLD", 2389.0, 2398.0, 0.68),
    ("YARIM ALTIN", "HALF GOLD", 4779.0, 4796.0, 0.72),
    ("TAM ALTIN", "FULL GOLD", 9558.0, 9592.0, 0.75),
    ("22 AYAR", "22 CARAT", 5282.82, 5545.77, 4.83),
    ("GRAM ALTIN", "GRAM GOLD", 5778.46, 5876.28, 1.55),
    ("ALTIN GÜMÜŞ", "GOLD SILVER", 70.66, 73.63, 0.59),
    ("REŞAT ALTIN", "RESAT GOLD", 9872.0, 9912.0, 0.82),
    ("ATA ALTIN", "ATA GOLD", 9612.0, 9652.0, 0.78),
];

const FALLBACK_CURRENCY: &[CurrencyRow] = &[
    ("USD", "USD", 34.125, 34.225, 0.55, "$"),
    ("EUR", "EUR", 35.890, 36.050, 0.68, "€"),
    ("GBP", "GBP", 43.250, 43.450, 0.42, "£"),
    ("CHF", "CHF", 38.650, 38.850, 0.38, "Fr"),
    ("AUD", "AUD", 22.150, 22.350, 0.25, "$"),
    ("CAD", "CAD", 24.050, 24.250, 0.31, "$"),
    ("SAR", "SAR", 9.100, 9.200, 0.18, "ر.س"),
    ("JPY", "JPY", 0.226, 0.230, 0.22, "¥"),
    ("KWD", "KWD", 111.250, 112.150, 0.45, "KD"),
    ("USD/KG", "USD/KG", 137.020, 137.520, 0.55, "$"),
    ("EUR/KG", "EUR/KG", 118.090, 118.750, 0.68, "€"),
];

fn gold_items(rows: &[GoldRow]) -> Vec<PriceItem> {
    rows.iter()
        .enumerate()
        .map(|(i, (name, name_en, buy, sell, change))| PriceItem {
            id: i as u32 + 1,
            name: name.to_string(),
            name_en: name_en.to_string(),
            buy: *buy,
            sell: *sell,
            change: *change,
            symbol: None,
            unit: UNIT.to_string(),
        })
        .collect()
}

fn currency_items(rows: &[CurrencyRow]) -> Vec<PriceItem> {
    rows.iter()
        .enumerate()
        .map(|(i, (name, name_en, buy, sell, change, symbol))| PriceItem {
            id: i as u32 + 1,
            name: name.to_string(),
            name_en: name_en.to_string(),
            buy: *buy,
            sell: *sell,
            change: *change,
            symbol: Some(symbol.to_string()),
            unit: UNIT.to_string(),
        })
        .collect()
}

/// Static snapshot served when the combined feed fails. Both categories
/// fall back together; no partial mixing within one adapter call.
pub fn fallback_board_harem() -> PriceBoard {
    PriceBoard {
        gold: gold_items(FALLBACK_GOLD_HAREM),
        currency: currency_items(FALLBACK_CURRENCY),
    }
}

/// Static gold list for the split feed's `/altin` operation.
pub fn fallback_gold_doviz() -> Vec<PriceItem> {
    gold_items(FALLBACK_GOLD_DOVIZ)
}

/// Static currency list for the split feed's `/doviz` operation.
pub fn fallback_currency_doviz() -> Vec<PriceItem> {
    currency_items(FALLBACK_CURRENCY)
}
