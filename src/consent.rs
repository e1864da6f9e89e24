//! Consent record model.
//!
//! A consent describes one data-sharing grant: which organization may see
//! which data types from which locker, with what permissions, and until when.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Wire format of every consent timestamp, e.g. `05/12/2024 10:34:28`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConsentStatus {
    Active,
    Expired,
    Pending,
    Revoked,
}

impl ConsentStatus {
    /// Identifier of the status, also used as its translation key.
    pub fn key(&self) -> &'static str {
        match self {
            ConsentStatus::Active => "active",
            ConsentStatus::Expired => "expired",
            ConsentStatus::Pending => "pending",
            ConsentStatus::Revoked => "revoked",
        }
    }
}

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Identifier of the risk level, also used as its translation key.
    pub fn key(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// A single data-sharing consent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    pub id: String,
    pub connection_type: String,
    pub host_user: String,
    pub host_locker: String,
    pub guest_locker: String,
    pub data_types: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_on: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub validity_on: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub expiry_date: NaiveDateTime,
    pub status: ConsentStatus,
    pub permissions: Vec<String>,
    #[serde(
        default,
        with = "optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_accessed: Option<NaiveDateTime>,
    pub access_count: u64,
    pub risk_level: RiskLevel,
    pub organization: String,
    pub purpose: String,
}

impl Consent {
    /// The data type shown on a collapsed card, if the consent covers any.
    pub fn primary_data_type(&self) -> Option<&str> {
        self.data_types.first().map(String::as_str)
    }

    /// Number of data types hidden behind the "+N more" hint.
    pub fn extra_data_type_count(&self) -> usize {
        self.data_types.len().saturating_sub(1)
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

mod optional_timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_str(&v.format(TIMESTAMP_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| super::parse_timestamp(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
