//! Star row renderer.
//!
//! Draws a [`RatingSnapshot`] as `★ ★ ☆ ☆` and maps screen positions back
//! to unit indices so clicks can be turned into activations.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::rating::RatingSnapshot;
use crate::ui::theme::{STAR_EMPTY, STAR_FILLED};

pub const FILLED_STAR: &str = "★";
pub const EMPTY_STAR: &str = "☆";

/// Columns taken by one star plus the gap after it.
const CELL_WIDTH: u16 = 2;

pub struct StarRow<'a> {
    snapshot: &'a RatingSnapshot,
    cursor: Option<usize>,
}

impl<'a> StarRow<'a> {
    pub fn new(snapshot: &'a RatingSnapshot) -> Self {
        Self {
            snapshot,
            cursor: None,
        }
    }

    /// Highlight the star under the keyboard cursor.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Columns needed to draw `unit_count` stars.
    pub fn row_width(unit_count: usize) -> u16 {
        let count = u16::try_from(unit_count).unwrap_or(u16::MAX);
        count.saturating_mul(CELL_WIDTH).saturating_sub(1)
    }

    /// Index of the star drawn at `(x, y)` in a row rendered into `area`.
    ///
    /// Gaps between stars and positions outside the row yield `None`.
    pub fn unit_at(area: Rect, unit_count: usize, x: u16, y: u16) -> Option<usize> {
        if area.height == 0 || y != area.y || x < area.x || x >= area.right() {
            return None;
        }
        let offset = x - area.x;
        if offset % CELL_WIDTH != 0 {
            return None;
        }
        let index = usize::from(offset / CELL_WIDTH);
        (index < unit_count).then_some(index)
    }
}

impl Widget for StarRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for (index, filled) in self.snapshot.filled.iter().enumerate() {
            let Ok(index_u16) = u16::try_from(index) else {
                break;
            };
            let offset = index_u16.saturating_mul(CELL_WIDTH);
            if offset >= area.width {
                break;
            }

            let (symbol, color) = if *filled {
                (FILLED_STAR, STAR_FILLED)
            } else {
                (EMPTY_STAR, STAR_EMPTY)
            };
            let mut style = Style::default().fg(color);
            if self.cursor == Some(index) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            buf.set_string(area.x + offset, area.y, symbol, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(buf: &Buffer, area: Rect) -> String {
        (area.x..area.right())
            .map(|x| buf[(x, area.y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn row_width_counts_gaps() {
        assert_eq!(StarRow::row_width(0), 0);
        assert_eq!(StarRow::row_width(1), 1);
        assert_eq!(StarRow::row_width(6), 11);
    }

    #[test]
    fn renders_filled_prefix() {
        let snapshot = RatingSnapshot {
            rating: 2,
            filled: vec![true, true, false, false],
        };
        let area = Rect::new(0, 0, 7, 1);
        let mut buf = Buffer::empty(area);

        StarRow::new(&snapshot).render(area, &mut buf);

        assert_eq!(symbols(&buf, area), "★ ★ ☆ ☆");
    }

    #[test]
    fn cursor_star_is_underlined() {
        let snapshot = RatingSnapshot {
            rating: 0,
            filled: vec![false, false, false],
        };
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);

        StarRow::new(&snapshot).cursor(1).render(area, &mut buf);

        assert!(buf[(2, 0)].modifier.contains(Modifier::UNDERLINED));
        assert!(!buf[(0, 0)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn narrow_area_truncates_row() {
        let snapshot = RatingSnapshot {
            rating: 5,
            filled: vec![true; 5],
        };
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);

        StarRow::new(&snapshot).render(area, &mut buf);

        assert_eq!(symbols(&buf, area), "★ ★");
    }

    #[test]
    fn unit_at_maps_star_columns() {
        let area = Rect::new(10, 4, 11, 1);
        assert_eq!(StarRow::unit_at(area, 6, 10, 4), Some(0));
        assert_eq!(StarRow::unit_at(area, 6, 16, 4), Some(3));
        assert_eq!(StarRow::unit_at(area, 6, 20, 4), Some(5));
    }

    #[test]
    fn unit_at_ignores_gaps_and_other_rows() {
        let area = Rect::new(10, 4, 11, 1);
        assert_eq!(StarRow::unit_at(area, 6, 11, 4), None);
        assert_eq!(StarRow::unit_at(area, 6, 12, 5), None);
        assert_eq!(StarRow::unit_at(area, 6, 9, 4), None);
        assert_eq!(StarRow::unit_at(area, 6, 21, 4), None);
    }
}
