//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consent::Consent;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::i18n::Language;
use crate::query::ConsentQuery;
use crate::stats::ConsentStats;
use crate::ui::app::UIConfig;

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// The three interchangeable renderings of the visible consents.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
    Analytics,
}

impl ViewMode {
    /// Tab order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Cards, ViewMode::Table, ViewMode::Analytics];

    pub fn label_key(&self) -> &'static str {
        match self {
            ViewMode::Cards => "cardView",
            ViewMode::Table => "tableView",
            ViewMode::Analytics => "analyticsView",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Where typed characters go.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the host-user name search.
    EditingName,
    /// Typing into the organization / type / data-type search.
    EditingSearch,
}

/// Dashboard state: the dataset plus everything the user can change about
/// how it is shown.
#[derive(Debug)]
pub struct DashboardState {
    /// Every consent, in dataset order. Never filtered in place.
    pub consents: Vec<Consent>,
    /// Aggregates over `consents`, fixed for the session.
    pub stats: ConsentStats,
    pub query: ConsentQuery,
    pub view_mode: ViewMode,
    pub language: Language,
    pub input_mode: InputMode,
    /// Index of the highlighted card or row within the visible list.
    pub cursor: usize,
    /// Ids of cards showing their details.
    pub expanded_cards: HashSet<String>,
    /// Ids of ticked table rows.
    pub selected_rows: HashSet<String>,
    /// Events waiting to be moved into the activity log.
    pub pending_events: VecDeque<Event>,
    /// Activity log for display (last `MAX_ACTIVITY_LOGS` events).
    pub activity_logs: VecDeque<Event>,
    pub show_activity_log: bool,
    /// Whether to paint a background color
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(consents: Vec<Consent>, ui_config: UIConfig) -> Self {
        let stats = ConsentStats::from_consents(&consents);
        Self {
            consents,
            stats,
            query: ConsentQuery::default(),
            view_mode: ui_config.view_mode,
            language: ui_config.language,
            input_mode: InputMode::Normal,
            cursor: 0,
            expanded_cards: HashSet::new(),
            selected_rows: HashSet::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            show_activity_log: false,
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// The filtered and sorted consents.
    pub fn visible(&self) -> Vec<&Consent> {
        self.query.apply(&self.consents)
    }

    /// Translate a key in the current language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.t(key)
    }

    /// The consent under the cursor, if the visible list is not empty.
    pub fn highlighted(&self) -> Option<&Consent> {
        self.visible().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible list after it shrinks.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Advance the animation tick and move queued events into the log.
    pub fn update(&mut self) {
        self.tick = self.tick.saturating_add(1);
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::ConsentStatus;
    use crate::dataset::mock_consents;
    use crate::logging::LogLevel;

    fn state() -> DashboardState {
        DashboardState::new(mock_consents(), UIConfig::default())
    }

    #[test]
    fn test_new_state_defaults() {
        let state = state();
        assert_eq!(state.view_mode, ViewMode::Cards);
        assert_eq!(state.language, Language::En);
        assert_eq!(state.stats.total, 4);
        assert_eq!(state.visible().len(), 4);
        assert_eq!(state.highlighted().map(|c| c.id.as_str()), Some("4"));
    }

    #[test]
    // Stats come from the full dataset, whatever the filters.
    fn test_stats_ignore_filters() {
        let mut state = state();
        state.query.status = Some(ConsentStatus::Pending);
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.stats.total, 4);
        assert_eq!(state.stats.active, 2);
    }

    #[test]
    fn test_clamp_cursor() {
        let mut state = state();
        state.cursor = 3;
        state.query.status = Some(ConsentStatus::Active);
        state.clamp_cursor();
        assert_eq!(state.cursor, 1);

        state.query.status = Some(ConsentStatus::Revoked);
        state.clamp_cursor();
        assert_eq!(state.cursor, 0);
        assert!(state.highlighted().is_none());
    }

    #[test]
    fn test_view_mode_cycles() {
        assert_eq!(ViewMode::Cards.next(), ViewMode::Table);
        assert_eq!(ViewMode::Analytics.next(), ViewMode::Cards);
        assert_eq!(ViewMode::Cards.previous(), ViewMode::Analytics);
    }

    #[test]
    // The activity log keeps only the newest entries.
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            state.add_event(Event::new(format!("event {}", i), LogLevel::Info));
        }
        state.update();
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
        assert!(state.pending_events.is_empty());
        assert_eq!(state.tick, 1);
    }
}
