//! Session setup and initialization

use crate::consent::Consent;
use crate::dataset::{load_validated, source_for};
use crate::error::DashboardError;
use crate::ui::UIConfig;
use std::path::PathBuf;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Every consent in the dataset, validated.
    pub consents: Vec<Consent>,
    /// Where the consents came from, for messages.
    pub source: String,
    pub ui_config: UIConfig,
}

/// Loads the dataset for a session
///
/// # Arguments
/// * `data_file` - JSON dataset to load; the built-in sample data when `None`
/// * `ui_config` - Resolved display settings
///
/// # Returns
/// * `Ok(SessionData)` - Dataset loaded and validated
/// * `Err` - The file could not be read, parsed or had duplicate ids
pub fn setup_session(
    data_file: Option<PathBuf>,
    ui_config: UIConfig,
) -> Result<SessionData, DashboardError> {
    let source = source_for(data_file.as_deref());
    let consents = load_validated(source.as_ref())?;

    Ok(SessionData {
        consents,
        source: source.describe(),
        ui_config,
    })
}
