//! Card view component
//!
//! One bordered card per visible consent. Collapsed cards show a two-line
//! summary; expanded cards add connection details, timeline, data types,
//! permissions and the access log.

use super::super::state::DashboardState;
use super::super::utils::{format_date, risk_color, status_color, status_icon};
use crate::consent::Consent;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Sample entries shown under the access-log heading of every expanded card.
const SAMPLE_ACCESS_LOG: [(&str, &str); 2] = [
    ("2024-01-15 12:30:45", "accessedByUser"),
    ("2024-01-10 08:45:12", "consentCreated"),
];

pub fn render_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let visible = state.visible();
    if visible.is_empty() {
        render_empty(f, area, state);
        return;
    }

    let cards: Vec<Vec<Line<'static>>> = visible
        .iter()
        .map(|consent| card_lines(consent, state))
        .collect();
    let heights: Vec<u16> = cards.iter().map(|lines| lines.len() as u16 + 2).collect();
    let start = first_visible(&heights, state.cursor, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (idx, lines) in cards.into_iter().enumerate().skip(start) {
        if y >= bottom {
            break;
        }
        let height = heights[idx].min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        let consent = visible[idx];
        let highlighted = idx == state.cursor;

        let border_style = if highlighted {
            Style::default().fg(Color::LightYellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if state.expanded_cards.contains(&consent.id) { "▾" } else { "▸" };
        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(format!(" {} ", marker), border_style),
                Span::styled(
                    format!("{} ", consent.organization),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
            .borders(Borders::ALL)
            .border_type(if highlighted {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);

        f.render_widget(Paragraph::new(lines).block(block), card_area);
        y += height;
    }
}

/// Index of the first card to draw so that the card under `cursor` fits
/// inside `available` rows.
fn first_visible(heights: &[u16], cursor: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let cursor = cursor.min(heights.len() - 1);
    let mut start = cursor;
    let available = u32::from(available);
    let mut used = u32::from(heights[cursor]);
    while start > 0 && used + u32::from(heights[start - 1]) <= available {
        start -= 1;
        used += u32::from(heights[start]);
    }
    // Prefer showing earlier cards when everything up to the cursor fits.
    let total_before: u64 = heights[..=cursor].iter().map(|&h| u64::from(h)).sum();
    if total_before <= u64::from(available) { 0 } else { start }
}

fn card_lines(consent: &Consent, state: &DashboardState) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White);
    let heading = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![badges_line(consent, state), summary_line(consent, state)];

    if !state.expanded_cards.contains(&consent.id) {
        return lines;
    }

    let field = |key: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("  {:<16}", format!("{}:", state.t(key))), label),
            Span::styled(text, value),
        ])
    };

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(state.t("connectionDetails").to_string(), heading)));
    lines.push(field("hostUser", consent.host_user.clone()));
    lines.push(field("hostLocker", consent.host_locker.clone()));
    lines.push(field("guestLocker", consent.guest_locker.clone()));
    lines.push(field("purpose", consent.purpose.clone()));

    lines.push(Line::from(Span::styled(state.t("timeline").to_string(), heading)));
    lines.push(field("createdDate", format_date(&consent.created_on)));
    lines.push(field("validFrom", format_date(&consent.validity_on)));
    lines.push(field("expiryDate", format_date(&consent.expiry_date)));
    if let Some(last) = &consent.last_accessed {
        lines.push(field("lastAccessed", format_date(last)));
    }

    lines.push(Line::from(Span::styled(state.t("dataTypes").to_string(), heading)));
    lines.push(chip_line(
        consent.data_types.iter().map(|d| state.t(d).to_string()),
        Color::Cyan,
    ));

    lines.push(Line::from(Span::styled(state.t("permissions").to_string(), heading)));
    lines.push(chip_line(
        consent.permissions.iter().map(|p| state.t(p).to_string()),
        Color::Magenta,
    ));

    lines.push(Line::from(Span::styled(state.t("accessLogs").to_string(), heading)));
    for (ts, key) in SAMPLE_ACCESS_LOG {
        lines.push(Line::from(Span::styled(
            format!("  {} - {}", ts, state.t(key)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if consent.is_high_risk() {
        let warn = Style::default().fg(Color::LightRed);
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", state.t("highRiskConsent")),
            warn.add_modifier(Modifier::BOLD),
        )));
        for key in ["nearExpiry", "sensitiveData", "highAccessVolume"] {
            lines.push(Line::from(Span::styled(format!("  • {}", state.t(key)), warn)));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", state.t("suggestedActions")), label),
            Span::styled(format!("[{}] ", state.t("revoke")), Style::default().fg(Color::Red)),
            Span::styled(format!("[{}] ", state.t("modify")), value),
            Span::styled(
                format!("[{}]", state.t("investigateAccess")),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    lines.push(
        Line::from(vec![
            Span::styled(
                format!("[⤓ {}]", state.t("downloadData")),
                Style::default().fg(Color::LightBlue),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[🗑 {}]", state.t("revokeConsent")),
                Style::default().fg(Color::Red),
            ),
        ])
        .alignment(Alignment::Right),
    );

    lines
}

fn badges_line(consent: &Consent, state: &DashboardState) -> Line<'static> {
    let status = consent.status;
    let risk = consent.risk_level;
    Line::from(vec![
        Span::styled(
            format!(" {} {} ", status_icon(status), state.t(status.key())),
            Style::default().fg(Color::Black).bg(status_color(status)),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {}: {} ", state.t("risk"), state.t(risk.key())),
            Style::default().fg(Color::Black).bg(risk_color(risk)),
        ),
        Span::raw("  "),
        Span::styled(consent.purpose.clone(), Style::default().fg(Color::Gray)),
    ])
}

fn summary_line(consent: &Consent, state: &DashboardState) -> Line<'static> {
    let muted = Style::default().fg(Color::Gray);
    let mut spans = vec![Span::styled(
        format!("📄 {}", consent.primary_data_type().unwrap_or("-")),
        Style::default().fg(Color::White),
    )];
    let extra = consent.extra_data_type_count();
    if extra > 0 {
        spans.push(Span::styled(
            format!(" +{} {}", extra, state.t("more")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        format!("   📅 {}: {}", state.t("expires"), format_date(&consent.expiry_date)),
        muted,
    ));
    spans.push(Span::styled(
        format!("   👁 {} {}", consent.access_count, state.t("accesses")),
        muted,
    ));
    Line::from(spans)
}

fn chip_line(items: impl Iterator<Item = String>, color: Color) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for item in items {
        spans.push(Span::styled(
            format!(" {} ", item),
            Style::default().fg(Color::Black).bg(color),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_empty(f: &mut Frame, area: Rect, state: &DashboardState) {
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            state.t("noConsentsFound").to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.t("adjustCriteria").to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];
    let empty = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(empty, area);
}
