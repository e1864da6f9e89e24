//! Dashboard footer component
//!
//! Renders key hints for the current input mode

use super::super::state::{DashboardState, InputMode, ViewMode};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn hints(state: &DashboardState) -> &'static str {
    match (state.input_mode, state.view_mode) {
        (InputMode::EditingName | InputMode::EditingSearch, _) => {
            "Type to search | [Backspace] Delete | [Enter/Esc] Done"
        }
        (InputMode::Normal, ViewMode::Table) => {
            "[q] Quit | [Tab] View | [↑↓] Move | [Space] Select | [a] Select all | [/] Search | [s/r] Filter | [S/R] Clear | [o/O] Sort | [x] Reset | [L] Language | [v] Log"
        }
        (InputMode::Normal, ViewMode::Cards) => {
            "[q] Quit | [Tab] View | [↑↓] Move | [Enter] Expand | [/] Search | [n] Name | [s/r] Filter | [S/R] Clear | [o/O] Sort | [1-5] Shortcuts | [L] Language | [v] Log"
        }
        (InputMode::Normal, ViewMode::Analytics) => {
            "[q] Quit | [Tab] View | [/] Search | [s/r] Filter | [S/R] Clear | [1-5] Shortcuts | [L] Language | [v] Log"
        }
    }
}

/// Render the footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer = Paragraph::new(hints(state))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
