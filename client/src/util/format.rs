//! Display formatting for sizes, timestamps, and scores.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable byte size with up to two decimals (`1.5 KB`, `2 MB`).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Parse a service timestamp.
///
/// Accepts RFC 3339 (normalized to UTC) and the offset-less ISO form Python's
/// `datetime.isoformat()` emits for naive timestamps.
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        let utc = dt.to_offset(UtcOffset::UTC);
        return Some(PrimitiveDateTime::new(utc.date(), utc.time()));
    }
    PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
    )
    .ok()
}

/// `YYYY-MM-DD HH:MM:SS`, or the raw text when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `HH:MM:SS`, or the raw text when it does not parse.
pub fn format_time_of_day(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|dt| dt.format(format_description!("[hour]:[minute]:[second]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Confidence score in `0.0..=1.0` as a whole percentage.
pub fn confidence_percent(score: f64) -> u32 {
    if !score.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (score.clamp(0.0, 1.0) * 100.0).round() as u32;
    pct
}

/// Coarse confidence band used for badge styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        match confidence_percent(score) {
            80.. => Self::High,
            50..=79 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}
