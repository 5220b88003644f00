//! Header rendering: plain and sortable variants.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::row::{Column, SortDirection, TableRow};
use crate::state::TableState;
use crate::table::Table;
use crate::widgets::{aligned_x, column_rects};

/// Renders the header line over the visible columns.
///
/// In sortable mode each non-placeholder label carries the indicator for
/// its current sort direction and records a hit region; the widget never
/// computes sort order itself.
pub(crate) fn render_header<T: TableRow>(
    table: &Table<'_, T>,
    cols: &[(usize, &Column)],
    area: Rect,
    buf: &mut Buffer,
    state: &mut TableState,
) {
    if area.is_empty() {
        return;
    }
    let theme = table.theme_ref();
    let style = theme.header();
    buf.set_style(area, style);

    for (j, (&(index, col), rect)) in cols.iter().zip(column_rects(area, cols)).enumerate() {
        if col.label.is_empty() {
            // Placeholder slot: no label, no sort affordance.
            continue;
        }
        let label = if table.sortable {
            match col.sort {
                SortDirection::Ascending => format!("{}{}", col.label, theme.sort_ascending),
                SortDirection::Descending => format!("{}{}", col.label, theme.sort_descending),
                SortDirection::None => col.label.clone(),
            }
        } else {
            col.label.clone()
        };
        let width = label.chars().count().min(rect.width as usize) as u16;
        let x = aligned_x(rect, width, table.text_alignment, j == 0);
        buf.set_stringn(x, area.y, &label, (rect.right() - x) as usize, style);

        if table.sortable {
            state
                .layout
                .header_cells
                .push((index, Rect::new(rect.x, area.y, rect.width, 1)));
        }
    }
}
