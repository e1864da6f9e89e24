//! Dashboard header component
//!
//! Renders the title, the visible-consent badge and the action labels

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Signed-in user shown in the header.
const USER_NAME: &str = "Rohith";

/// Render header with title on the left and actions on the right.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState, visible_count: usize) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            "🛡 ",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.t("consentManager"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} {} ", visible_count, state.t("activeConsents")),
            Style::default().fg(Color::Black).bg(Color::LightGreen),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let key_style = Style::default().fg(Color::DarkGray);
    let actions = Line::from(vec![
        Span::styled(state.t("export"), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            format!("🔒 {}", state.t("locker")),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw("  "),
        Span::styled("[L] ", key_style),
        Span::styled(
            state.language.switch_label(),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("+ {}", state.t("newConsent")),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(format!("👤 {}", USER_NAME), Style::default().fg(Color::White)),
    ]);
    f.render_widget(
        Paragraph::new(actions).alignment(Alignment::Right),
        chunks[1],
    );
}
