//! Locale-aware numeric parsing for upstream price feeds.

/// Parses a Turkish-formatted numeric string into a float.
///
/// Price fields use `.` as the thousands separator and `,` as the decimal
/// separator (`"5.777,76"` -> `5777.76`). Percent fields already use a
/// decimal point (`"34.72"`) and are parsed as-is when `is_percent` is set.
///
/// Empty or malformed input degrades to `0.0` so a single bad field never
/// aborts an entire snapshot.
pub fn parse_locale_number(raw: &str, is_percent: bool) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }

    if is_percent {
        return raw.parse().unwrap_or(0.0);
    }

    let cleaned = raw.replace('.', "").replace(',', ".");
    cleaned.parse().unwrap_or(0.0)
}
