//! Analytics view component
//!
//! Four bar charts over the visible consents: risk, status, expiry month and
//! access volume per organization.

use super::super::state::DashboardState;
use super::super::utils::{risk_color, status_color, truncate};
use crate::analytics::ConsentAnalytics;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

pub fn render_analytics(f: &mut Frame, area: Rect, state: &DashboardState) {
    let analytics = ConsentAnalytics::from_consents(&state.visible());
    if analytics.is_empty() {
        let empty = Paragraph::new(state.t("noConsentsFound"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(chart_block(""));
        f.render_widget(empty, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let risk_bars: Vec<Bar> = analytics
        .risk
        .iter()
        .map(|(level, n)| bar(state.t(level.key()).to_string(), *n, risk_color(*level)))
        .collect();
    render_vertical(f, top[0], state.t("riskDistribution"), &risk_bars);

    let status_bars: Vec<Bar> = analytics
        .status
        .iter()
        .map(|(status, n)| bar(state.t(status.key()).to_string(), *n, status_color(*status)))
        .collect();
    render_vertical(f, top[1], state.t("statusDistribution"), &status_bars);

    let expiring_bars: Vec<Bar> = analytics
        .expiring
        .iter()
        .map(|(month, n)| bar(month.clone(), *n, Color::LightYellow))
        .collect();
    render_vertical(f, bottom[0], state.t("expiringConsents"), &expiring_bars);

    let access_bars: Vec<Bar> = analytics
        .access_by_organization
        .iter()
        .map(|(org, n)| bar(truncate(org, 16), *n, Color::Magenta))
        .collect();
    let access_chart = BarChart::default()
        .block(chart_block(state.t("accessFrequency")))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&access_bars));
    f.render_widget(access_chart, bottom[1]);
}

fn bar<'a>(label: String, value: u64, color: Color) -> Bar<'a> {
    Bar::default()
        .label(Line::from(label))
        .value(value)
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

fn render_vertical(f: &mut Frame, area: Rect, title: &str, bars: &[Bar]) {
    let chart = BarChart::default()
        .block(chart_block(title))
        .bar_width(7)
        .bar_gap(2)
        .data(BarGroup::default().bars(bars));
    f.render_widget(chart, area);
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}
