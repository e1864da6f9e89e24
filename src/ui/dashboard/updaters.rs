//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from key presses

use super::state::{DashboardState, InputMode, ViewMode};
use crate::stats::StatKind;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};

/// What the UI loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

impl DashboardState {
    /// Apply one key press to the dashboard.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::EditingName | InputMode::EditingSearch => {
                self.handle_text_input(key);
                KeyOutcome::Continue
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Tab => self.set_view_mode(self.view_mode.next()),
            KeyCode::BackTab => self.set_view_mode(self.view_mode.previous()),
            KeyCode::Char('/') => self.input_mode = InputMode::EditingSearch,
            KeyCode::Char('n') => self.input_mode = InputMode::EditingName,
            KeyCode::Char('s') => {
                self.query.cycle_status();
                info!("Status filter: {}", describe(self.query.status));
                self.on_filters_changed();
            }
            KeyCode::Char('r') => {
                self.query.cycle_risk();
                info!("Risk filter: {}", describe(self.query.risk));
                self.on_filters_changed();
            }
            KeyCode::Char('S') => {
                self.query.clear_status();
                info!("Status filter removed");
                self.on_filters_changed();
            }
            KeyCode::Char('R') => {
                self.query.clear_risk();
                info!("Risk filter removed");
                self.on_filters_changed();
            }
            KeyCode::Char('o') => {
                self.query.cycle_sort_key();
                info!("Sorting by {:?}", self.query.sort_by);
                self.on_filters_changed();
            }
            KeyCode::Char('O') => {
                self.query.toggle_sort_order();
                info!("Sort order: {:?}", self.query.sort_order);
                self.on_filters_changed();
            }
            KeyCode::Char('x') => {
                self.query.reset();
                info!("Filters reset");
                self.on_filters_changed();
            }
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.apply_stat(StatKind::ALL[idx]);
            }
            KeyCode::Char('L') => {
                self.language = self.language.toggled();
                info!("Language switched to {}", self.language);
            }
            KeyCode::Char('v') => self.show_activity_log = !self.show_activity_log,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Enter => self.toggle_expanded(),
            KeyCode::Char(' ') => match self.view_mode {
                ViewMode::Cards => self.toggle_expanded(),
                ViewMode::Table => self.toggle_selected(),
                ViewMode::Analytics => {}
            },
            KeyCode::Char('a') if self.view_mode == ViewMode::Table => self.toggle_select_all(),
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_text_input(&mut self, key: KeyEvent) {
        let field = match self.input_mode {
            InputMode::EditingName => &mut self.query.name_search,
            InputMode::EditingSearch => &mut self.query.search_term,
            InputMode::Normal => return,
        };
        match key.code {
            KeyCode::Char(c) => field.push(c),
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Enter | KeyCode::Esc => {
                debug!("Search updated: name={:?} term={:?}", self.query.name_search, self.query.search_term);
                self.input_mode = InputMode::Normal;
            }
            _ => return,
        }
        self.on_filters_changed();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            self.view_mode = mode;
            info!("Switched to {:?} view", mode);
        }
    }

    /// Stats-strip shortcut. Cards without a shortcut do nothing.
    pub fn apply_stat(&mut self, kind: StatKind) {
        if kind.apply_to(&mut self.query) {
            info!("Filter shortcut: {:?}", kind);
            self.on_filters_changed();
        }
    }

    fn on_filters_changed(&mut self) {
        self.clamp_cursor();
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        let len = self.visible().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Expand or collapse the highlighted card.
    fn toggle_expanded(&mut self) {
        let Some(id) = self.highlighted().map(|c| c.id.clone()) else {
            return;
        };
        if !self.expanded_cards.remove(&id) {
            debug!("Expanded consent {}", id);
            self.expanded_cards.insert(id);
        }
    }

    /// Tick or untick the highlighted table row.
    fn toggle_selected(&mut self) {
        let Some(id) = self.highlighted().map(|c| c.id.clone()) else {
            return;
        };
        if !self.selected_rows.remove(&id) {
            self.selected_rows.insert(id);
        }
        debug!("{} consents selected", self.selected_rows.len());
    }

    /// Select every visible row, or clear the selection if all are selected.
    fn toggle_select_all(&mut self) {
        let visible: Vec<String> = self.visible().iter().map(|c| c.id.clone()).collect();
        if self.selected_rows.len() == visible.len() {
            self.selected_rows.clear();
        } else {
            self.selected_rows = visible.into_iter().collect();
        }
        debug!("{} consents selected", self.selected_rows.len());
    }
}

fn describe<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "all".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::{ConsentStatus, RiskLevel};
    use crate::dataset::mock_consents;
    use crate::i18n::Language;
    use crate::query::{SortKey, SortOrder};
    use crate::ui::app::UIConfig;

    fn state() -> DashboardState {
        DashboardState::new(mock_consents(), UIConfig::default())
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> KeyOutcome {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert_eq!(press(&mut s, KeyCode::Char('q')), KeyOutcome::Quit);
        assert_eq!(press(&mut s, KeyCode::Esc), KeyOutcome::Quit);
        assert_eq!(
            s.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyOutcome::Quit
        );
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut s = state();
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.view_mode, ViewMode::Table);
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.view_mode, ViewMode::Analytics);
        press(&mut s, KeyCode::BackTab);
        assert_eq!(s.view_mode, ViewMode::Table);
    }

    #[test]
    // While editing, letters go into the search box instead of triggering commands.
    fn test_search_input_captures_keys() {
        let mut s = state();
        press(&mut s, KeyCode::Char('/'));
        assert_eq!(s.input_mode, InputMode::EditingSearch);
        type_text(&mut s, "qzerodhax");
        press(&mut s, KeyCode::Backspace);
        assert_eq!(s.query.search_term, "qzerodha");
        assert!(s.visible().is_empty());

        // Esc leaves edit mode rather than quitting.
        assert_eq!(press(&mut s, KeyCode::Esc), KeyOutcome::Continue);
        assert_eq!(s.input_mode, InputMode::Normal);
        assert_eq!(s.query.search_term, "qzerodha");
    }

    #[test]
    fn test_name_search_input() {
        let mut s = state();
        press(&mut s, KeyCode::Char('n'));
        type_text(&mut s, "rohith");
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.query.name_search, "rohith");
        assert_eq!(s.visible().len(), 4);
    }

    #[test]
    fn test_filter_keys() {
        let mut s = state();
        press(&mut s, KeyCode::Char('s'));
        assert_eq!(s.query.status, Some(ConsentStatus::Active));
        press(&mut s, KeyCode::Char('r'));
        assert_eq!(s.query.risk, Some(RiskLevel::Low));
        assert_eq!(s.visible().len(), 1);

        press(&mut s, KeyCode::Char('S'));
        assert_eq!(s.query.status, None);
        press(&mut s, KeyCode::Char('R'));
        assert_eq!(s.query.risk, None);
    }

    #[test]
    fn test_sort_keys_and_reset() {
        let mut s = state();
        press(&mut s, KeyCode::Char('o'));
        assert_eq!(s.query.sort_by, SortKey::ExpiryDate);
        press(&mut s, KeyCode::Char('O'));
        assert_eq!(s.query.sort_order, SortOrder::Asc);
        press(&mut s, KeyCode::Char('s'));

        press(&mut s, KeyCode::Char('x'));
        assert_eq!(s.query.sort_by, SortKey::CreatedOn);
        assert_eq!(s.query.sort_order, SortOrder::Asc);
        assert_eq!(s.query.status, None);
    }

    #[test]
    // Number keys map onto the stats strip in display order.
    fn test_stat_shortcuts() {
        let mut s = state();
        press(&mut s, KeyCode::Char('3'));
        assert_eq!(s.query.status, Some(ConsentStatus::Expired));
        press(&mut s, KeyCode::Char('5'));
        assert_eq!(s.query.status, Some(ConsentStatus::Expired));
        assert_eq!(s.query.risk, Some(RiskLevel::High));
        assert!(s.visible().is_empty());

        let before = s.query.clone();
        press(&mut s, KeyCode::Char('6'));
        assert_eq!(s.query, before);

        press(&mut s, KeyCode::Char('1'));
        assert_eq!(s.query.status, None);
        assert_eq!(s.query.risk, None);
    }

    #[test]
    fn test_language_toggle() {
        let mut s = state();
        press(&mut s, KeyCode::Char('L'));
        assert_eq!(s.language, Language::Hi);
        press(&mut s, KeyCode::Char('L'));
        assert_eq!(s.language, Language::En);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut s = state();
        press(&mut s, KeyCode::Up);
        assert_eq!(s.cursor, 0);
        for _ in 0..10 {
            press(&mut s, KeyCode::Down);
        }
        assert_eq!(s.cursor, 3);

        // Narrowing the list pulls the cursor back in.
        press(&mut s, KeyCode::Char('4'));
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn test_card_expand_toggle() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        assert!(s.expanded_cards.contains("4"));
        press(&mut s, KeyCode::Char(' '));
        assert!(s.expanded_cards.is_empty());
    }

    #[test]
    fn test_table_selection() {
        let mut s = state();
        press(&mut s, KeyCode::Tab);
        press(&mut s, KeyCode::Char(' '));
        assert_eq!(s.selected_rows.len(), 1);

        // Not everything is selected, so select-all selects every visible row.
        press(&mut s, KeyCode::Char('a'));
        assert_eq!(s.selected_rows.len(), 4);
        press(&mut s, KeyCode::Char('a'));
        assert!(s.selected_rows.is_empty());
    }

    #[test]
    // Select-all only ticks rows that pass the filters.
    fn test_select_all_respects_filters() {
        let mut s = state();
        s.set_view_mode(ViewMode::Table);
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('a'));
        let mut ids: Vec<_> = s.selected_rows.iter().cloned().collect();
        ids.sort();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    // Ticked rows stay ticked while filters hide them, and after a reset.
    fn test_selection_survives_filter_changes() {
        let mut s = state();
        s.set_view_mode(ViewMode::Table);
        press(&mut s, KeyCode::Char('a'));
        let selected = s.selected_rows.clone();
        assert_eq!(selected.len(), 4);

        press(&mut s, KeyCode::Char('s'));
        press(&mut s, KeyCode::Char('r'));
        type_text(&mut s, "/bank");
        press(&mut s, KeyCode::Enter);
        assert!(s.visible().len() < 4);
        assert_eq!(s.selected_rows, selected);

        press(&mut s, KeyCode::Char('x'));
        assert_eq!(s.visible().len(), 4);
        assert_eq!(s.selected_rows, selected);
    }

    #[test]
    fn test_empty_list_ignores_row_actions() {
        let mut s = state();
        s.query.status = Some(ConsentStatus::Revoked);
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Down);
        assert!(s.expanded_cards.is_empty());
        assert_eq!(s.cursor, 0);
    }
}
