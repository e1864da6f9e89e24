//! Consent datasets.
//!
//! The dashboard ships with a small seeded dataset. A JSON file with the same
//! record shape can be supplied instead with `--data`.

use crate::consent::{Consent, ConsentStatus, RiskLevel, parse_timestamp};
use crate::error::DashboardError;
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Something that can produce the list of consents to display.
#[cfg_attr(test, automock)]
pub trait ConsentSource {
    /// Load every record, in display order.
    fn load(&self) -> Result<Vec<Consent>, DashboardError>;

    /// Short human-readable name of the source, for logs.
    fn describe(&self) -> String;
}

/// The built-in seed data.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSource;

impl ConsentSource for MockSource {
    fn load(&self) -> Result<Vec<Consent>, DashboardError> {
        Ok(mock_consents())
    }

    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }
}

/// A JSON array of consent records on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConsentSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Consent>, DashboardError> {
        let buf = fs::read(&self.path)?;
        let consents: Vec<Consent> = serde_json::from_slice(&buf)?;
        Ok(consents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the file source when a path is given, the seed data otherwise.
pub fn source_for(path: Option<&Path>) -> Box<dyn ConsentSource> {
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(MockSource),
    }
}

/// Load from `source` and reject datasets whose ids are not unique.
pub fn load_validated(source: &dyn ConsentSource) -> Result<Vec<Consent>, DashboardError> {
    let consents = source.load()?;
    let mut seen = HashSet::with_capacity(consents.len());
    for consent in &consents {
        if !seen.insert(consent.id.as_str()) {
            return Err(DashboardError::DuplicateId(consent.id.clone()));
        }
    }
    log::debug!(
        "Loaded {} consents from {}",
        consents.len(),
        source.describe()
    );
    Ok(consents)
}

fn ts(s: &str) -> NaiveDateTime {
    // Seed timestamps are literals checked by the tests below.
    parse_timestamp(s).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The seeded consents shown when no dataset file is configured.
pub fn mock_consents() -> Vec<Consent> {
    vec![
        Consent {
            id: "1".to_string(),
            connection_type: "Academic".to_string(),
            host_user: "Rohith".to_string(),
            host_locker: "IIT-Roorkee".to_string(),
            guest_locker: "Admissions".to_string(),
            data_types: strings(&["Academic Records", "Personal Info", "Certificates"]),
            created_on: ts("05/12/2024 10:34:28"),
            validity_on: ts("20/12/2024 18:30:00"),
            expiry_date: ts("01/05/2025 23:59:59"),
            status: ConsentStatus::Active,
            permissions: strings(&["read", "download"]),
            last_accessed: Some(ts("18/12/2024 14:22:15")),
            access_count: 12,
            risk_level: RiskLevel::Low,
            organization: "Academic Bank of Credits".to_string(),
            purpose: "Admission Process".to_string(),
        },
        Consent {
            id: "2".to_string(),
            connection_type: "Financial".to_string(),
            host_user: "Rohith".to_string(),
            host_locker: "Santhi".to_string(),
            guest_locker: "Documents".to_string(),
            data_types: strings(&["Bank Statements", "Income Proof", "Identity"]),
            created_on: ts("08/12/2024 11:34:15"),
            validity_on: ts("18/12/2024 18:30:00"),
            expiry_date: ts("02/11/2024 02:23:30"),
            status: ConsentStatus::Expired,
            permissions: strings(&["read"]),
            last_accessed: Some(ts("02/11/2024 01:45:22")),
            access_count: 8,
            risk_level: RiskLevel::Medium,
            organization: "Zerodha".to_string(),
            purpose: "Account Verification".to_string(),
        },
        Consent {
            id: "3".to_string(),
            connection_type: "Healthcare".to_string(),
            host_user: "Rohith".to_string(),
            host_locker: "Medical-Records".to_string(),
            guest_locker: "Apollo-Hospital".to_string(),
            data_types: strings(&["Medical History", "Lab Reports", "Prescriptions"]),
            created_on: ts("10/01/2024 08:45:12"),
            validity_on: ts("10/01/2024 08:45:12"),
            expiry_date: ts("10/07/2025 23:59:59"),
            status: ConsentStatus::Active,
            permissions: strings(&["read", "write", "share"]),
            last_accessed: Some(ts("15/01/2024 12:30:45")),
            access_count: 5,
            risk_level: RiskLevel::High,
            organization: "Apollo Hospitals".to_string(),
            purpose: "Treatment & Consultation".to_string(),
        },
        Consent {
            id: "4".to_string(),
            connection_type: "Employment".to_string(),
            host_user: "Rohith".to_string(),
            host_locker: "Professional".to_string(),
            guest_locker: "HR-Portal".to_string(),
            data_types: strings(&["Resume", "Certificates", "References"]),
            created_on: ts("10/12/2024 14:20:10"),
            validity_on: ts("12/12/2024 00:00:00"),
            expiry_date: ts("10/03/2025 23:59:59"),
            status: ConsentStatus::Pending,
            permissions: strings(&["read"]),
            last_accessed: None,
            access_count: 0,
            risk_level: RiskLevel::Low,
            organization: "TechCorp Solutions".to_string(),
            purpose: "Job Application Review".to_string(),
        },
    ]
}
