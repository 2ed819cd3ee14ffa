use crate::ui::app::{App, StatusKind};
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_inner, layout_regions, star_row_area};
use crate::ui::star_row::StarRow;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let control = app.control();

    frame.render_widget(
        Header::new().widget(control.rating(), control.unit_count()),
        header,
    );

    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default()
            .title(Span::styled(" Rate this ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        body,
    );

    let snapshot = control.snapshot();
    let row = star_row_area(area, snapshot.len());
    frame.render_widget(StarRow::new(&snapshot).cursor(app.cursor()), row);

    let inner = body_inner(area);
    let caption_y = row.y.saturating_add(2);
    if caption_y < inner.bottom() {
        let caption = Line::from(Span::styled(
            format!("{} of {} stars", snapshot.rating, snapshot.len()),
            Style::default().fg(HEADER_SEPARATOR),
        ));
        frame.render_widget(
            Paragraph::new(caption).alignment(Alignment::Center),
            Rect::new(inner.x, caption_y, inner.width, 1),
        );
    }

    if let Some(status) = app.status() {
        let status_y = row.y.saturating_add(3);
        if status_y < inner.bottom() {
            let color = match status.kind {
                StatusKind::Info => STATUS_OK,
                StatusKind::Error => STATUS_ERROR,
            };
            let line = Line::from(Span::styled(status.text.clone(), Style::default().fg(color)));
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                Rect::new(inner.x, status_y, inner.width, 1),
            );
        }
    }

    frame.render_widget(Footer::new().widget(footer), footer);

    render_confirm_dialog(frame, app.confirm_dialog(), body);
}
