//! Caller-owned display state and the widget's own render state.
//!
//! The widget is a stateless projection from (data, flags) to buffer
//! content: expansion flags, the pagination cursor, and sort directions are
//! all owned and mutated by the caller and supplied fresh each render.
//! [`TableState`] holds only what the widget itself needs between renders:
//! the scroll offset, the animation tick, and the hit layout recorded while
//! drawing.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Per-row transient display state, keyed by row position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowState {
    /// The row's auxiliary content region is expanded.
    pub expanded: bool,
}

impl RowState {
    pub fn expanded() -> Self {
        Self { expanded: true }
    }
}

/// Incremental "load more" pagination cursor, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of rows currently shown. Values beyond the row count clamp
    /// to the row count.
    pub visible_rows: usize,
    /// More rows are available; when false the footer is not rendered.
    pub has_more: bool,
    /// A load-more request is in flight. While true the footer trigger is
    /// disabled and no load-more event can be produced.
    pub is_fetching: bool,
}

impl Pagination {
    pub fn new(visible_rows: usize, has_more: bool) -> Self {
        Self {
            visible_rows,
            has_more,
            is_fetching: false,
        }
    }

    pub fn fetching(mut self) -> Self {
        self.is_fetching = true;
        self
    }
}

/// Hit regions recorded during the last render, used to map mouse input
/// back to rows, header cells, and the footer trigger.
///
/// Regions are only recorded for affordances that are live: rows when row
/// clicks are enabled, header cells when sorting is enabled, the footer
/// when no request is in flight. Input mapping therefore needs no flag
/// checks of its own.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitLayout {
    /// (original column index, cell rect) for sortable header cells.
    pub header_cells: Vec<(usize, Rect)>,
    /// (row index, click rect) for clickable rows.
    pub rows: Vec<(usize, Rect)>,
    /// Footer trigger rect, absent while a load-more request is in flight.
    pub footer: Option<Rect>,
    /// Body viewport, target for wheel scrolling.
    pub body: Option<Rect>,
    /// Body viewport height in lines, used as the keyboard page size.
    pub page: usize,
}

impl HitLayout {
    pub fn clear(&mut self) {
        self.header_cells.clear();
        self.rows.clear();
        self.footer = None;
        self.body = None;
        self.page = 0;
    }
}

/// Mutable state for a [`Table`](crate::Table) widget.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Scroll offset: index of the first visible data row. Clamped to the
    /// visible row count at render time.
    pub offset: usize,
    /// Animation frame counter for loader indicators. Advance it on the
    /// application's tick event.
    pub tick: usize,
    pub(crate) layout: HitLayout,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scrolls up by one row.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scrolls down by one row. Clamped at the next render.
    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    /// Scrolls up by a page.
    pub fn page_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scrolls down by a page. Clamped at the next render.
    pub fn page_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n);
    }

    /// Scrolls to the first row.
    pub fn home(&mut self) {
        self.offset = 0;
    }

    /// Scrolls to the end. Clamped at the next render.
    pub fn end(&mut self) {
        self.offset = usize::MAX;
    }

    /// Advances the loader animation by one frame.
    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_up_saturates_at_zero() {
        let mut state = TableState::new();
        state.scroll_up();
        assert_eq!(state.offset, 0);
        state.page_up(10);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn scroll_down_and_back() {
        let mut state = TableState::new();
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.offset, 2);
        state.scroll_up();
        assert_eq!(state.offset, 1);
        state.home();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn end_is_clamped_later() {
        let mut state = TableState::new();
        state.end();
        assert_eq!(state.offset, usize::MAX);
    }

    #[test]
    fn tick_wraps_without_panicking() {
        let mut state = TableState {
            tick: usize::MAX,
            ..Default::default()
        };
        state.advance_tick();
        assert_eq!(state.tick, 0);
    }

    #[test]
    fn missing_row_state_defaults_to_collapsed() {
        let states: Vec<RowState> = vec![RowState::expanded()];
        assert!(states.first().is_some_and(|s| s.expanded));
        assert!(!states.get(5).copied().unwrap_or_default().expanded);
    }
}
