//! Stats strip component
//!
//! Six counters over the full dataset; the first five double as filter
//! shortcuts on keys 1-5.

use super::super::state::DashboardState;
use crate::consts::cli_consts::STAT_ANIMATION_TICKS;
use crate::stats::{StatKind, animated_value};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn stat_color(kind: StatKind) -> Color {
    match kind {
        StatKind::TotalConsents => Color::LightBlue,
        StatKind::Active => Color::Green,
        StatKind::Expired => Color::Gray,
        StatKind::Pending => Color::Cyan,
        StatKind::HighRisk => Color::LightRed,
        StatKind::TotalAccess => Color::Magenta,
    }
}

pub fn render_stats(f: &mut Frame, area: Rect, state: &DashboardState) {
    let outer = Block::default()
        .title(state.t("consentOverview"))
        .title_style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, StatKind::ALL.len() as u32); 6])
        .split(inner);

    for (idx, kind) in StatKind::ALL.iter().enumerate() {
        let color = stat_color(*kind);
        let value = animated_value(state.stats.value(*kind), state.tick, STAT_ANIMATION_TICKS);

        let mut title = state.t(kind.label_key()).to_string();
        if kind.is_clickable() {
            title = format!("[{}] {}", idx + 1, title);
        }

        let card = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(card, cells[idx]);
    }
}
