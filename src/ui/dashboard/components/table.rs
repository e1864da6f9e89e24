//! Table view component
//!
//! Tabular rendering of the visible consents with a selection column and a
//! bulk-action bar above the table while any row is ticked

use super::super::state::DashboardState;
use super::super::utils::{format_date, risk_color, status_color, truncate};
use crate::consent::Consent;
use crate::consts::cli_consts::TABLE_DATA_TYPES_SHOWN;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

pub fn render_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let visible = state.visible();

    let (bar_area, table_area) = if state.selected_rows.is_empty() {
        (None, area)
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    };

    if let Some(bar_area) = bar_area {
        render_selection_bar(f, bar_area, state);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            state.t("noMatchingConsents"),
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, table_area);
        return;
    }

    let all_selected = state.selected_rows.len() == visible.len();
    let header = Row::new(vec![
        Cell::from(checkbox(all_selected)),
        Cell::from(state.t("organization")),
        Cell::from(state.t("type")),
        Cell::from(state.t("dataTypes")),
        Cell::from(state.t("status")),
        Cell::from(state.t("risk")),
        Cell::from(state.t("createdDate")),
        Cell::from(state.t("expiryDate")),
        Cell::from(state.t("accessCount")),
    ])
    .style(
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|consent| consent_row(consent, state))
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Min(22),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::Rgb(40, 44, 60)))
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(table, table_area, &mut table_state);
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn consent_row<'a>(consent: &'a Consent, state: &DashboardState) -> Row<'a> {
    let mut data_types: Vec<String> = consent
        .data_types
        .iter()
        .take(TABLE_DATA_TYPES_SHOWN)
        .map(|d| state.t(d).to_string())
        .collect();
    let hidden = consent.data_types.len().saturating_sub(TABLE_DATA_TYPES_SHOWN);
    if hidden > 0 {
        data_types.push(format!("+{}", hidden));
    }

    let organization = Line::from(vec![
        Span::styled(
            consent.organization.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", truncate(&consent.purpose, 18)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    Row::new(vec![
        Cell::from(checkbox(state.selected_rows.contains(&consent.id))),
        Cell::from(organization),
        Cell::from(consent.connection_type.as_str()),
        Cell::from(data_types.join(", ")),
        Cell::from(Span::styled(
            state.t(consent.status.key()).to_string(),
            Style::default().fg(status_color(consent.status)),
        )),
        Cell::from(Span::styled(
            state.t(consent.risk_level.key()).to_string(),
            Style::default().fg(risk_color(consent.risk_level)),
        )),
        Cell::from(format_date(&consent.created_on)),
        Cell::from(format_date(&consent.expiry_date)),
        Cell::from(consent.access_count.to_string()),
    ])
}

fn render_selection_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let count = state.selected_rows.len();
    let noun = if count == 1 { state.t("consent") } else { state.t("consents") };
    let bar = Line::from(vec![
        Span::styled(
            format!(" {} {} {} ", count, noun, state.t("selected")),
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", state.t("exportSelected")),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", state.t("revokeSelected")),
            Style::default().fg(Color::Red),
        ),
    ]);
    f.render_widget(Paragraph::new(bar), area);
}
