//! Dashboard main renderer

use super::components::{analytics, cards, filters, footer, header, logs, stats, table};
use super::state::{DashboardState, ViewMode};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Tabs};

/// Height of the activity log panel when shown.
const LOG_PANEL_HEIGHT: u16 = 8;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let visible_count = state.visible().len();
    let log_height = if state.show_activity_log { LOG_PANEL_HEIGHT } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(log_height),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state, visible_count);
    stats::render_stats(f, main_chunks[1], state);
    filters::render_filters(f, main_chunks[2], state);
    render_view_tabs(f, main_chunks[3], state, visible_count);

    match state.view_mode {
        ViewMode::Cards => cards::render_cards(f, main_chunks[4], state),
        ViewMode::Table => table::render_table(f, main_chunks[4], state),
        ViewMode::Analytics => analytics::render_analytics(f, main_chunks[4], state),
    }

    if state.show_activity_log {
        logs::render_logs_panel(f, main_chunks[5], state);
    }
    footer::render_footer(f, main_chunks[6], state);
}

fn render_view_tabs(f: &mut Frame, area: Rect, state: &DashboardState, visible_count: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let titles: Vec<String> = ViewMode::ALL
        .iter()
        .map(|mode| state.t(mode.label_key()).to_string())
        .collect();
    let tabs = Tabs::new(titles)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .select(state.view_mode.index());
    f.render_widget(tabs, chunks[0]);

    let showing = format!(
        "{} {} {} {} {}",
        state.t("showing"),
        visible_count,
        state.t("of"),
        state.consents.len(),
        state.t("consents")
    );
    f.render_widget(
        Paragraph::new(showing)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Gray)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::ConsentStatus;
    use crate::dataset::mock_consents;
    use crate::events::Event;
    use crate::i18n::Language;
    use crate::logging::LogLevel;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state() -> DashboardState {
        DashboardState::new(mock_consents(), UIConfig::default())
    }

    fn draw(state: &DashboardState) -> String {
        let backend = TestBackend::new(180, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_cards_view_renders_every_consent() {
        let screen = draw(&state());
        assert!(screen.contains("Consent Manager"));
        assert!(screen.contains("Showing 4 of 4 consents"));
        assert!(screen.contains("Zerodha"));
        assert!(screen.contains("Apollo Hospitals"));
        assert!(screen.contains("Total Consents"));
    }

    #[test]
    fn test_filtered_view_updates_count() {
        let mut state = state();
        state.query.status = Some(ConsentStatus::Active);
        let screen = draw(&state);
        assert!(screen.contains("Showing 2 of 4 consents"));
        assert!(!screen.contains("Zerodha"));
        assert!(screen.contains("Active Status"));
    }

    #[test]
    // An expanded card lists its connection details.
    fn test_expanded_card_shows_details() {
        let mut state = state();
        state.expanded_cards.insert("4".to_string());
        let screen = draw(&state);
        assert!(screen.contains("Connection Details"));
        assert!(screen.contains("Access Logs"));
    }

    #[test]
    fn test_empty_results_message() {
        let mut state = state();
        state.query.search_term = "no such organization".to_string();
        let screen = draw(&state);
        assert!(screen.contains("No consents found"));

        state.view_mode = ViewMode::Table;
        let screen = draw(&state);
        assert!(screen.contains("No consents found matching your criteria."));
    }

    #[test]
    fn test_table_view_shows_selection_bar() {
        let mut state = state();
        state.view_mode = ViewMode::Table;
        state.selected_rows.insert("1".to_string());
        let screen = draw(&state);
        assert!(screen.contains("Academic Bank"));
        assert!(screen.contains("1 Consent selected"));
    }

    #[test]
    fn test_analytics_view_titles() {
        let mut state = state();
        state.view_mode = ViewMode::Analytics;
        let screen = draw(&state);
        assert!(screen.contains("Risk Distribution"));
        assert!(screen.contains("Access Frequency"));
    }

    #[test]
    fn test_activity_log_panel() {
        let mut state = state();
        state.show_activity_log = true;
        state.add_event(Event::new("Switched to table view", LogLevel::Info));
        state.update();
        let screen = draw(&state);
        assert!(screen.contains("Activity Log"));
        assert!(screen.contains("Switched to table view"));
    }

    #[test]
    // Whatever the logger let through is shown, debug records included.
    fn test_activity_log_shows_admitted_debug_events() {
        let mut state = state();
        state.show_activity_log = true;
        state.add_event(Event::new("Sorting by ExpiryDate", LogLevel::Debug));
        state.update();
        let screen = draw(&state);
        assert!(screen.contains("Sorting by ExpiryDate"));
    }

    #[test]
    // The language switch button always names the other language.
    fn test_hindi_header_offers_english() {
        let mut state = state();
        state.language = Language::Hi;
        let screen = draw(&state);
        assert!(screen.contains("English"));
    }
}
