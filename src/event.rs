//! Events raised by the table and the input mapping that produces them.
//!
//! The widget never invokes callbacks. Input is mapped against the hit
//! layout recorded by the last render, and the resulting event is returned
//! to the caller, who owns all reactions (re-sorting, fetching more rows,
//! toggling expansion).

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::state::TableState;

/// Events produced by [`TableState::handle_mouse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// A clickable row was clicked. `row` indexes the caller's row slice.
    RowClicked { row: usize },
    /// A sortable header cell was clicked. `column` indexes the caller's
    /// column slice (hidden columns included).
    SortToggled { column: usize },
    /// The load-more trigger was clicked. Never produced while a request
    /// is already in flight.
    LoadMoreRequested,
}

fn hit(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

impl TableState {
    /// Maps a mouse event to a table event using the hit regions recorded
    /// by the last render. Wheel events over the body scroll by one row
    /// and produce no event.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<TableEvent> {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                for &(column, rect) in &self.layout.header_cells {
                    if hit(rect, x, y) {
                        return Some(TableEvent::SortToggled { column });
                    }
                }
                for &(row, rect) in &self.layout.rows {
                    if hit(rect, x, y) {
                        return Some(TableEvent::RowClicked { row });
                    }
                }
                if self.layout.footer.is_some_and(|rect| hit(rect, x, y)) {
                    return Some(TableEvent::LoadMoreRequested);
                }
                None
            }
            MouseEventKind::ScrollUp if self.layout.body.is_some_and(|r| hit(r, x, y)) => {
                self.scroll_up();
                None
            }
            MouseEventKind::ScrollDown if self.layout.body.is_some_and(|r| hit(r, x, y)) => {
                self.scroll_down();
                None
            }
            _ => None,
        }
    }

    /// Handles scroll keys. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let page = self.layout.page.max(1);
        match key.code {
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::PageUp => self.page_up(page),
            KeyCode::PageDown => self.page_down(page),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            _ => return false,
        }
        true
    }
}
