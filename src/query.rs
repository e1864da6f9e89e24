//! Filter and sort derivation over the consent list.
//!
//! The visible list is always recomputed from scratch: a conjunction of the
//! four filter predicates followed by a stable sort on one key.

use crate::consent::{Consent, ConsentStatus, RiskLevel};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field the visible list is sorted on.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    CreatedOn,
    ExpiryDate,
    Organization,
    AccessCount,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::CreatedOn,
        SortKey::ExpiryDate,
        SortKey::Organization,
        SortKey::AccessCount,
    ];

    /// Translation key of the sort option label.
    pub fn label_key(&self) -> &'static str {
        match self {
            SortKey::CreatedOn => "createdDate",
            SortKey::ExpiryDate => "expiryDate",
            SortKey::Organization => "organization",
            SortKey::AccessCount => "accessCount",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn compare(&self, a: &Consent, b: &Consent) -> Ordering {
        match self {
            SortKey::CreatedOn => a.created_on.cmp(&b.created_on),
            SortKey::ExpiryDate => a.expiry_date.cmp(&b.expiry_date),
            SortKey::Organization => a.organization.cmp(&b.organization),
            SortKey::AccessCount => a.access_count.cmp(&b.access_count),
        }
    }
}

#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        }
    }
}

/// A removable tag describing one active filter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterTag {
    Status(ConsentStatus),
    Risk(RiskLevel),
}

impl FilterTag {
    /// Tag text, e.g. `Active Status` or `High Risk`.
    pub fn label(&self, lang: Language) -> String {
        match self {
            FilterTag::Status(status) => {
                format!("{} {}", capitalize(status.key()), lang.t("status"))
            }
            FilterTag::Risk(risk) => format!("{} {}", capitalize(risk.key()), lang.t("risk")),
        }
    }
}

/// Filter and sort criteria for the visible consent list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentQuery {
    /// Matched against the host user.
    pub name_search: String,
    /// Matched against organization, connection type and data types.
    pub search_term: String,
    /// `None` means all statuses.
    pub status: Option<ConsentStatus>,
    /// `None` means all risk levels.
    pub risk: Option<RiskLevel>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl ConsentQuery {
    /// Whether `consent` passes every filter.
    pub fn matches(&self, consent: &Consent) -> bool {
        let name = self.name_search.to_lowercase();
        let term = self.search_term.to_lowercase();

        let matches_name = name.is_empty() || consent.host_user.to_lowercase().contains(&name);
        let matches_search = term.is_empty()
            || consent.organization.to_lowercase().contains(&term)
            || consent.connection_type.to_lowercase().contains(&term)
            || consent
                .data_types
                .iter()
                .any(|t| t.to_lowercase().contains(&term));
        let matches_status = self.status.is_none_or(|s| consent.status == s);
        let matches_risk = self.risk.is_none_or(|r| consent.risk_level == r);

        matches_name && matches_search && matches_status && matches_risk
    }

    /// Filter `consents` and sort the survivors. Ties keep input order.
    pub fn apply<'a>(&self, consents: &'a [Consent]) -> Vec<&'a Consent> {
        let mut visible: Vec<&Consent> = consents.iter().filter(|c| self.matches(c)).collect();
        visible.sort_by(|a, b| {
            let ord = self.sort_by.compare(a, b);
            match self.sort_order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        visible
    }

    /// Clear searches and filters and return to the default sort key.
    /// The sort order is kept.
    pub fn reset(&mut self) {
        self.name_search.clear();
        self.search_term.clear();
        self.status = None;
        self.risk = None;
        self.sort_by = SortKey::CreatedOn;
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn clear_risk(&mut self) {
        self.risk = None;
    }

    /// Step the status filter: all -> active -> expired -> pending -> revoked -> all.
    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(ConsentStatus::Active),
            Some(ConsentStatus::Active) => Some(ConsentStatus::Expired),
            Some(ConsentStatus::Expired) => Some(ConsentStatus::Pending),
            Some(ConsentStatus::Pending) => Some(ConsentStatus::Revoked),
            Some(ConsentStatus::Revoked) => None,
        };
    }

    /// Step the risk filter: all -> low -> medium -> high -> all.
    pub fn cycle_risk(&mut self) {
        self.risk = match self.risk {
            None => Some(RiskLevel::Low),
            Some(RiskLevel::Low) => Some(RiskLevel::Medium),
            Some(RiskLevel::Medium) => Some(RiskLevel::High),
            Some(RiskLevel::High) => None,
        };
    }

    pub fn cycle_sort_key(&mut self) {
        self.sort_by = self.sort_by.next();
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Tags for the filters that are not "all", status first.
    pub fn active_tags(&self) -> Vec<FilterTag> {
        let mut tags = Vec::new();
        if let Some(status) = self.status {
            tags.push(FilterTag::Status(status));
        }
        if let Some(risk) = self.risk {
            tags.push(FilterTag::Risk(risk));
        }
        tags
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
