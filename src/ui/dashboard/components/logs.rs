//! Dashboard logs panel component
//!
//! Renders the activity log, newest first

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, log_level_color};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity log panel.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Borders plus one row of padding
    let max_logs = (area.height.saturating_sub(3)) as usize;
    let log_count = if max_logs > 0 { max_logs } else { 1 };

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.log_level {
                LogLevel::Error => "❌",
                LogLevel::Warn => "⚠",
                _ => "•",
            };

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(log_level_color(event.log_level)),
                ),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Ready.")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title(state.t("activityLog"))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let log_widget = log_paragraph.block(logs_block).wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}
