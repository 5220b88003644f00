//! Body rendering: real rows (plain or expandable), skeleton placeholders,
//! and the empty state.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Paragraph, Widget};

use crate::plan::{BodyPlan, RenderPlan, RowMode};
use crate::row::{Column, TableRow};
use crate::state::TableState;
use crate::table::Table;
use crate::widgets::{aligned_x, column_rects};

/// Renders the body region per the resolved plan.
///
/// Returns the first free line after the content when the end of the
/// content is on screen (so an in-flow footer can follow), `None`
/// otherwise.
pub(crate) fn render_body<T: TableRow>(
    table: &Table<'_, T>,
    plan: &RenderPlan,
    cols: &[(usize, &Column)],
    area: Rect,
    buf: &mut Buffer,
    state: &mut TableState,
) -> Option<u16> {
    if area.is_empty() {
        return None;
    }
    state.layout.body = Some(area);
    state.layout.page = area.height as usize;

    match plan.body {
        BodyPlan::Skeleton { rows } => render_skeleton(table, rows, cols, area, buf),
        BodyPlan::EmptyState => {
            render_empty_state(table, area, buf);
            None
        }
        BodyPlan::Rows { visible } => render_rows(table, plan, visible, cols, area, buf, state),
    }
}

/// Placeholder rows spanning the visible columns, with an optional note
/// centered over them.
fn render_skeleton<T: TableRow>(
    table: &Table<'_, T>,
    rows: usize,
    cols: &[(usize, &Column)],
    area: Rect,
    buf: &mut Buffer,
) -> Option<u16> {
    let theme = table.theme_ref();
    let style = theme.skeleton();
    let col_rects = column_rects(area, cols);

    let mut y = area.y;
    for _ in 0..rows {
        if y >= area.bottom() {
            return None;
        }
        for rect in &col_rects {
            let run = theme.skeleton_glyph.repeat(rect.width as usize);
            buf.set_stringn(rect.x, y, &run, rect.width as usize, style);
        }
        y += 1;
    }

    if let Some(node) = &table.loading_node {
        let height = (node.height() as u16).min(area.height);
        let mid = area.y + (y - area.y).saturating_sub(height) / 2;
        let rect = Rect::new(area.x, mid, area.width, height);
        Paragraph::new(node.clone())
            .alignment(Alignment::Center)
            .style(theme.dim())
            .render(rect, buf);
    }
    Some(y)
}

/// Caller-supplied empty-state content, centered in the body area.
fn render_empty_state<T: TableRow>(table: &Table<'_, T>, area: Rect, buf: &mut Buffer) {
    let theme = table.theme_ref();
    let text = table.empty_state.clone();
    let height = (text.height() as u16).min(area.height);
    let y = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect::new(area.x, y, area.width, height);
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(theme.dim())
        .render(rect, buf);
}

/// Real rows from the scroll offset, in plain or expandable mode.
fn render_rows<T: TableRow>(
    table: &Table<'_, T>,
    plan: &RenderPlan,
    visible: usize,
    cols: &[(usize, &Column)],
    area: Rect,
    buf: &mut Buffer,
    state: &mut TableState,
) -> Option<u16> {
    let theme = table.theme_ref();
    let rows = &table.rows[..visible.min(table.rows.len())];
    let col_rects = column_rects(area, cols);

    let mut y = area.y;
    if rows.is_empty() {
        // A zero-row page: nothing to draw, the footer may follow directly.
        return Some(y);
    }
    let mut last_rendered = None;
    for (i, row) in rows.iter().enumerate().skip(state.offset) {
        if y >= area.bottom() {
            break;
        }
        let expanded = table.expandable
            && table
                .rows_state
                .get(i)
                .copied()
                .unwrap_or_default()
                .expanded;
        let aux_height = if expanded {
            table.expanded_height.resolve(row)
        } else {
            0
        };

        let row_style = if row.is_highlighted() {
            theme.highlight()
        } else {
            theme.base()
        };
        let line = Rect::new(area.x, y, area.width, 1);
        buf.set_style(line, row_style);
        let cells = row.cells();
        for (j, (&(index, _), rect)) in cols.iter().zip(&col_rects).enumerate() {
            if let Some(cell) = cells.get(index) {
                let width = cell.chars().count().min(rect.width as usize) as u16;
                let x = aligned_x(*rect, width, table.text_alignment, j == 0);
                buf.set_stringn(x, y, cell, (rect.right() - x) as usize, row_style);
            }
        }

        // Auxiliary content region below the cell line.
        let aux_shown = aux_height.min(area.bottom().saturating_sub(y + 1));
        if aux_shown > 0 {
            let aux = Rect::new(area.x, y + 1, area.width, aux_shown);
            buf.set_style(aux, theme.card());
            if let Some(content) = &table.expandable_content {
                Paragraph::new(content(row)).style(theme.card()).render(aux, buf);
            }
        }

        if table.clickable_rows {
            let hit = match plan.row_mode {
                // Plain rows are clickable across their full width.
                RowMode::Plain => line,
                // Expandable rows only through the first cell's area, so
                // clicks on controls in other cells are not intercepted.
                RowMode::Expandable => match col_rects.first() {
                    Some(first) => Rect::new(first.x, y, first.width, 1 + aux_shown),
                    None => line,
                },
            };
            state.layout.rows.push((i, hit));
        }

        y += 1 + aux_shown;
        if aux_shown < aux_height {
            // Clipped at the bottom edge; the list continues off screen.
            break;
        }
        last_rendered = Some(i);
    }

    match last_rendered {
        Some(i) if i + 1 == rows.len() => Some(y),
        _ => None,
    }
}
