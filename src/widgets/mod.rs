//! Render functions for the table's regions.

pub(crate) mod body;
pub(crate) mod footer;
pub(crate) mod header;

use ratatui::layout::{Constraint, Layout, Rect};

use crate::row::{CellAlignment, Column};

/// Gap between columns, in cells.
pub(crate) const COLUMN_SPACING: u16 = 1;

/// Solves the horizontal rects for the visible columns against one line of
/// the given area.
pub(crate) fn column_rects(area: Rect, cols: &[(usize, &Column)]) -> Vec<Rect> {
    let widths: Vec<Constraint> = cols.iter().map(|(_, c)| c.width).collect();
    Layout::horizontal(widths)
        .spacing(COLUMN_SPACING)
        .split(Rect::new(area.x, area.y, area.width, 1))
        .to_vec()
}

/// Starting x for cell content of the given display width, aligned within
/// its column rect.
pub(crate) fn aligned_x(rect: Rect, text_width: u16, alignment: CellAlignment, first: bool) -> u16 {
    let w = text_width.min(rect.width);
    match alignment {
        CellAlignment::Left => rect.x,
        CellAlignment::Right => rect.right() - w,
        CellAlignment::Center => rect.x + (rect.width - w) / 2,
        CellAlignment::Default => {
            if first {
                rect.x
            } else {
                rect.right() - w
            }
        }
    }
}
