//! Chart series for the analytics view, derived from the visible consents.

use crate::consent::{Consent, ConsentStatus, RiskLevel};
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentAnalytics {
    /// Count per risk level, low to high.
    pub risk: Vec<(RiskLevel, u64)>,
    /// Count per status, in declaration order.
    pub status: Vec<(ConsentStatus, u64)>,
    /// Consents expiring per calendar month, oldest month first.
    pub expiring: Vec<(String, u64)>,
    /// Summed access counts per organization, busiest first.
    pub access_by_organization: Vec<(String, u64)>,
}

impl ConsentAnalytics {
    pub fn from_consents(consents: &[&Consent]) -> Self {
        Self {
            risk: risk_distribution(consents),
            status: status_distribution(consents),
            expiring: expiring_by_month(consents),
            access_by_organization: access_by_organization(consents),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_by_organization.is_empty()
    }
}

pub fn risk_distribution(consents: &[&Consent]) -> Vec<(RiskLevel, u64)> {
    RiskLevel::iter()
        .map(|level| {
            let n = consents.iter().filter(|c| c.risk_level == level).count();
            (level, n as u64)
        })
        .collect()
}

pub fn status_distribution(consents: &[&Consent]) -> Vec<(ConsentStatus, u64)> {
    ConsentStatus::iter()
        .map(|status| {
            let n = consents.iter().filter(|c| c.status == status).count();
            (status, n as u64)
        })
        .collect()
}

pub fn expiring_by_month(consents: &[&Consent]) -> Vec<(String, u64)> {
    let mut months: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for consent in consents {
        let date = consent.expiry_date.date();
        *months.entry((date.year(), date.month())).or_default() += 1;
    }
    months
        .into_iter()
        .map(|((year, month), n)| (month_label(year, month), n))
        .collect()
}

pub fn access_by_organization(consents: &[&Consent]) -> Vec<(String, u64)> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for consent in consents {
        let total = totals.entry(consent.organization.as_str()).or_default();
        *total = total.saturating_add(consent.access_count);
    }
    let mut rows: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(org, n)| (org.to_string(), n))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{month:02}/{year}"))
}
