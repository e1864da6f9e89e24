//! Aggregate counts for the stats strip.
//!
//! Always computed over the full dataset, never the filtered list, so the
//! numbers stay put while the user narrows the view.

use crate::consent::{Consent, ConsentStatus, RiskLevel};
use crate::query::ConsentQuery;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsentStats {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub pending: usize,
    pub high_risk: usize,
    pub total_access: u64,
}

impl ConsentStats {
    pub fn from_consents(consents: &[Consent]) -> Self {
        let count_status = |status: ConsentStatus| consents.iter().filter(|c| c.status == status).count();
        Self {
            total: consents.len(),
            active: count_status(ConsentStatus::Active),
            expired: count_status(ConsentStatus::Expired),
            pending: count_status(ConsentStatus::Pending),
            high_risk: consents
                .iter()
                .filter(|c| c.risk_level == RiskLevel::High)
                .count(),
            total_access: consents
                .iter()
                .fold(0, |sum, c| sum.saturating_add(c.access_count)),
        }
    }

    pub fn value(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::TotalConsents => self.total as u64,
            StatKind::Active => self.active as u64,
            StatKind::Expired => self.expired as u64,
            StatKind::Pending => self.pending as u64,
            StatKind::HighRisk => self.high_risk as u64,
            StatKind::TotalAccess => self.total_access,
        }
    }
}

/// One card of the stats strip.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatKind {
    TotalConsents,
    Active,
    Expired,
    Pending,
    HighRisk,
    TotalAccess,
}

impl StatKind {
    /// Display order of the strip.
    pub const ALL: [StatKind; 6] = [
        StatKind::TotalConsents,
        StatKind::Active,
        StatKind::Expired,
        StatKind::Pending,
        StatKind::HighRisk,
        StatKind::TotalAccess,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            StatKind::TotalConsents => "totalConsents",
            StatKind::Active => "active",
            StatKind::Expired => "expired",
            StatKind::Pending => "pending",
            StatKind::HighRisk => "highRisk",
            StatKind::TotalAccess => "totalAccess",
        }
    }

    /// Whether selecting the card changes the filters.
    pub fn is_clickable(&self) -> bool {
        !matches!(self, StatKind::TotalAccess)
    }

    /// Apply the card's filter shortcut. Returns `false` for cards without one.
    ///
    /// Status cards reset the risk filter; the high-risk card leaves the
    /// status filter alone.
    pub fn apply_to(&self, query: &mut ConsentQuery) -> bool {
        match self {
            StatKind::TotalConsents => {
                query.status = None;
                query.risk = None;
            }
            StatKind::Active => {
                query.status = Some(ConsentStatus::Active);
                query.risk = None;
            }
            StatKind::Expired => {
                query.status = Some(ConsentStatus::Expired);
                query.risk = None;
            }
            StatKind::Pending => {
                query.status = Some(ConsentStatus::Pending);
                query.risk = None;
            }
            StatKind::HighRisk => {
                query.risk = Some(RiskLevel::High);
            }
            StatKind::TotalAccess => return false,
        }
        true
    }
}

/// Value to show for a counter animating up to `target` over `duration_ticks`.
pub fn animated_value(target: u64, tick: usize, duration_ticks: usize) -> u64 {
    if duration_ticks == 0 || tick >= duration_ticks {
        return target;
    }
    (u128::from(target) * tick as u128 / duration_ticks as u128) as u64
}
