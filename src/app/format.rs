//! Display formatting for prices and stay dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `$189.50`
pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `$189.50 / night`
pub fn nightly_rate(price: f64) -> String {
    format!("{} / night", money(price))
}

/// Render an API date as `M/D/YYYY`.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` and plain
/// `YYYY-MM-DD`. Anything else is shown as received.
pub fn display_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `3/1/2025 → 3/4/2025`
pub fn stay_range(check_in: &str, check_out: &str) -> String {
    format!("{} → {}", display_date(check_in), display_date(check_out))
}
