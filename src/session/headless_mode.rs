//! Headless mode execution
//!
//! One-shot `list` and `stats` commands that print to stdout instead of
//! opening the dashboard.

use super::SessionData;
use crate::i18n::Language;
use crate::query::ConsentQuery;
use crate::stats::{ConsentStats, StatKind};
use crate::ui::dashboard::utils::format_date;
use log::debug;
use std::error::Error;
use std::io::Write;

/// Output shape of the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
}

/// Prints the consents matching `query`
///
/// # Arguments
/// * `session` - Session data from setup
/// * `query` - Filters and sort order built from the command-line flags
/// * `format` - Human-readable lines or a JSON array of records
pub fn run_list(
    session: &SessionData,
    query: &ConsentQuery,
    format: ListFormat,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let visible = query.apply(&session.consents);
    debug!("{} of {} consents match", visible.len(), session.consents.len());

    match format {
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &visible)?;
            writeln!(out)?;
        }
        ListFormat::Text => {
            let lang = session.ui_config.language;
            writeln!(
                out,
                "{} {} {} {} {}",
                lang.t("showing"),
                visible.len(),
                lang.t("of"),
                session.consents.len(),
                lang.t("consents")
            )?;
            if visible.is_empty() {
                writeln!(out, "{}", lang.t("noMatchingConsents"))?;
            }
            for consent in visible {
                writeln!(
                    out,
                    "{:>4}  {:<28} {:<12} {:<10} {:<8} {}: {}  {} {}",
                    consent.id,
                    consent.organization,
                    consent.connection_type,
                    lang.t(consent.status.key()),
                    lang.t(consent.risk_level.key()),
                    lang.t("expires"),
                    format_date(&consent.expiry_date),
                    consent.access_count,
                    lang.t("accesses"),
                )?;
            }
        }
    }
    Ok(())
}

/// Prints the six dashboard counters over the whole dataset.
pub fn run_stats(session: &SessionData, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let stats = ConsentStats::from_consents(&session.consents);
    write_stats(&stats, session.ui_config.language, out)?;
    Ok(())
}

fn write_stats(stats: &ConsentStats, lang: Language, out: &mut impl Write) -> std::io::Result<()> {
    for kind in StatKind::ALL {
        writeln!(out, "{}: {}", lang.t(kind.label_key()), stats.value(kind))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::ConsentStatus;
    use crate::session::setup_session;
    use crate::ui::UIConfig;

    fn session(language: Language) -> SessionData {
        let ui_config = UIConfig {
            language,
            ..UIConfig::default()
        };
        setup_session(None, ui_config).unwrap()
    }

    fn list(session: &SessionData, query: &ConsentQuery, format: ListFormat) -> String {
        let mut out = Vec::new();
        run_list(session, query, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_text_follows_query_order() {
        let text = list(&session(Language::En), &ConsentQuery::default(), ListFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Showing 4 of 4 consents");
        assert!(lines[1].contains("TechCorp Solutions"));
        assert!(lines[4].contains("Apollo Hospitals"));
    }

    #[test]
    fn test_list_json_is_filtered() {
        let query = ConsentQuery {
            status: Some(ConsentStatus::Active),
            ..ConsentQuery::default()
        };
        let json = list(&session(Language::En), &query, ListFormat::Json);
        let records: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r["status"] == "active"));
    }

    #[test]
    fn test_list_empty_result() {
        let query = ConsentQuery {
            search_term: "nobody".to_string(),
            ..ConsentQuery::default()
        };
        let text = list(&session(Language::En), &query, ListFormat::Text);
        assert!(text.contains("No consents found matching your criteria."));
    }

    #[test]
    fn test_stats_lines() {
        let mut out = Vec::new();
        run_stats(&session(Language::En), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total Consents: 4"));
        assert!(text.contains("Active: 2"));
        assert!(text.contains("Total Access: 25"));
    }

    #[test]
    fn test_stats_in_hindi() {
        let mut out = Vec::new();
        run_stats(&session(Language::Hi), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("कुल सहमतियाँ: 4"));
    }
}
