use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::star_row::StarRow;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Body area without its border.
pub fn body_inner(area: Rect) -> Rect {
    let body = layout_regions(area).1;
    Rect {
        x: body.x.saturating_add(1),
        y: body.y.saturating_add(1),
        width: body.width.saturating_sub(2),
        height: body.height.saturating_sub(2),
    }
}

/// Where the star row sits for a screen of size `area`: one line, centered
/// in the body. Used both for drawing and for mouse hit testing.
pub fn star_row_area(area: Rect, unit_count: usize) -> Rect {
    let inner = body_inner(area);
    let width = StarRow::row_width(unit_count).min(inner.width);
    Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y + inner.height.saturating_sub(1) / 2,
        width,
        height: inner.height.min(1),
    }
}

/// Create a centered rect of given size, shrunk to fit `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn star_row_is_centered_in_body() {
        let row = star_row_area(Rect::new(0, 0, 80, 24), 6);
        assert_eq!(row.width, 11);
        assert_eq!(row.x, 1 + (78 - 11) / 2);
        assert_eq!(row.height, 1);
        assert_eq!(row.y, 4 + 15 / 2);
    }

    #[test]
    fn star_row_shrinks_on_tiny_screen() {
        let row = star_row_area(Rect::new(0, 0, 8, 6), 10);
        assert_eq!(row.width, 6);
        assert_eq!(row.height, 0);
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_by_size(area, 34, 7);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);

        let rect = centered_rect_by_size(Rect::new(0, 0, 80, 24), 34, 7);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (23, 8, 34, 7));
    }
}
