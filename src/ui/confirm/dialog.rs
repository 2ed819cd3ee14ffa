//! Rendering for the confirmation dialog.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};

use super::state::{ConfirmDialogState, CONFIRM_TITLE};

const DIALOG_WIDTH: u16 = 34;
const DIALOG_HEIGHT: u16 = 7;

/// Draw the dialog on top of `area`. Does nothing while hidden.
pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmDialogState, area: Rect) {
    let Some(message) = state.message() else {
        return;
    };

    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", CONFIRM_TITLE),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        ok_button(),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn ok_button() -> Line<'static> {
    Line::from(Span::styled(
        " OK ",
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    ))
}
