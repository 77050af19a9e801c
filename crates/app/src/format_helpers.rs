//! Shared formatting utilities for the UI layer.
//!
//! Timestamps from the backend are shown in their own clock; no timezone
//! conversion happens here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const PESO: char = '\u{20b1}';

/// Format an amount as Philippine pesos: `₱12,500`, `₱99.5`, `₱1,234.56`.
///
/// Whole amounts carry no decimals; fractions are rounded to centavos with
/// trailing zeros dropped.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}0", PESO);
    }
    let centavos = (amount.abs() * 100.0).round() as u64;
    let whole = centavos / 100;
    let frac = centavos % 100;

    let mut out = String::new();
    if amount < 0.0 && centavos > 0 {
        out.push('-');
    }
    out.push(PESO);
    out.push_str(&group_thousands(whole));
    if frac > 0 {
        let digits = format!("{:02}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse the timestamp shapes the backend emits: RFC 3339, ISO without an
/// offset, space-separated, or a bare date.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "Jan 20, 2026". Unparseable input comes back unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "Jan 20, 2026, 09:35 AM". Unparseable input comes back unchanged.
pub fn format_datetime(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// Placeholder for empty optional fields.
pub fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}
