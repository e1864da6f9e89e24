//! Search & filter bar component
//!
//! Renders both search boxes, the status / risk / sort selectors and the
//! removable active-filter tags

use super::super::state::{DashboardState, InputMode};
use crate::query::FilterTag;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_filters(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(20),
        ])
        .split(rows[0]);

    render_search_box(
        f,
        boxes[0],
        &format!("[n] {}", state.t("hostUser")),
        &state.query.name_search,
        state.t("searchByName"),
        state.input_mode == InputMode::EditingName,
    );
    render_search_box(
        f,
        boxes[1],
        &format!("[/] {}", state.t("search")),
        &state.query.search_term,
        state.t("organization"),
        state.input_mode == InputMode::EditingSearch,
    );

    let status_value = match state.query.status {
        Some(status) => state.t(status.key()),
        None => state.t("allStatus"),
    };
    render_selector(f, boxes[2], &format!("[s] {}", state.t("status")), status_value);

    let risk_value = match state.query.risk {
        Some(risk) => state.t(risk.key()),
        None => state.t("allRisk"),
    };
    render_selector(f, boxes[3], &format!("[r] {}", state.t("risk")), risk_value);

    let sort_value = format!(
        "{} · {}",
        state.t(state.query.sort_by.label_key()),
        state.t(state.query.sort_order.label_key())
    );
    render_selector(f, boxes[4], &format!("[o/O] {}", state.t("sortBy")), &sort_value);

    render_tags(f, rows[1], state);
}

fn render_search_box(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    editing: bool,
) {
    let border_color = if editing { Color::LightYellow } else { Color::DarkGray };
    let line = if value.is_empty() && !editing {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(Color::White))];
        if editing {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);
}

fn render_selector(f: &mut Frame, area: Rect, title: &str, value: &str) {
    let selector = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(selector, area);
}

fn render_tags(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut spans = Vec::new();
    for tag in state.query.active_tags() {
        let (bg, remove_key) = match tag {
            FilterTag::Status(_) => (Color::Blue, "S"),
            FilterTag::Risk(_) => (Color::Yellow, "R"),
        };
        spans.push(Span::styled(
            format!(" {} [{}]× ", tag.label(state.language), remove_key),
            Style::default().fg(Color::Black).bg(bg),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!("[x] {}", state.t("resetFilters")),
        Style::default().fg(Color::LightBlue),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
