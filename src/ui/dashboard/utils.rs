//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::consent::{ConsentStatus, RiskLevel};
use crate::logging::LogLevel;
use chrono::NaiveDateTime;
use ratatui::prelude::Color;

pub fn status_color(status: ConsentStatus) -> Color {
    match status {
        ConsentStatus::Active => Color::Green,
        ConsentStatus::Pending => Color::Cyan,
        ConsentStatus::Expired => Color::Gray,
        ConsentStatus::Revoked => Color::Red,
    }
}

pub fn status_icon(status: ConsentStatus) -> &'static str {
    match status {
        ConsentStatus::Active => "✔",
        ConsentStatus::Expired => "⌛",
        ConsentStatus::Pending => "!",
        ConsentStatus::Revoked => "✘",
    }
}

pub fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::High => Color::LightRed,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
    }
}

pub fn log_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Cyan,
        LogLevel::Debug | LogLevel::Trace => Color::DarkGray,
    }
}

/// Date-only rendering used on cards and table rows, e.g. `05 Dec 2024`.
pub fn format_date(ts: &NaiveDateTime) -> String {
    ts.format("%d %b %Y").to_string()
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Cut `s` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::parse_timestamp;

    #[test]
    fn test_format_date() {
        let ts = parse_timestamp("05/12/2024 10:34:28").unwrap();
        assert_eq!(format_date(&ts), "05 Dec 2024");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-12-18 14:22:15"), "12-18 14:22");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Zerodha", 10), "Zerodha");
        assert_eq!(truncate("Academic Bank of Credits", 10), "Academic …");
        assert_eq!(truncate("abc", 0), "…");
    }
}
