//! The table widget: configuration surface and top-level layout.
//!
//! A [`Table`] is built fresh each render from borrowed data and flags,
//! resolves a [`RenderPlan`], splits its area into title / header / body /
//! footer regions, and delegates each region to a render function. All
//! display state (expansion, pagination, sort directions) is owned by the
//! caller; the widget's own [`TableState`] carries only scroll offset,
//! animation tick, and the recorded hit layout.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, StatefulWidget, Widget};
use tracing::warn;

use crate::plan::{BodyPlan, DisplayFlags, LoadingMode, RenderPlan, resolve};
use crate::row::{CellAlignment, Column, TableRow};
use crate::state::{Pagination, RowState, TableState};
use crate::theme::{TableTheme, default_theme};
use crate::widgets::{body, footer, header};

/// Auxiliary region height when none is configured.
const DEFAULT_EXPANDED_HEIGHT: u16 = 4;

/// Height of the expandable auxiliary region: fixed, or computed per row
/// from the row's data.
pub enum ExpandedHeight<'a, T> {
    Fixed(u16),
    PerRow(Box<dyn Fn(&T) -> u16 + 'a>),
}

impl<T> ExpandedHeight<'_, T> {
    /// Resolves the height for one row.
    pub fn resolve(&self, row: &T) -> u16 {
        match self {
            Self::Fixed(h) => *h,
            Self::PerRow(f) => f(row),
        }
    }
}

/// A data-driven table widget.
///
/// Rendering is a pure projection: the same rows, columns, flags, and
/// state produce the same buffer content every time.
pub struct Table<'a, T: TableRow> {
    pub(crate) rows: &'a [T],
    pub(crate) columns: &'a [Column],

    // Loading
    pub(crate) loading: bool,
    pub(crate) inline_loader: bool,
    pub(crate) loading_node: Option<Text<'a>>,
    pub(crate) skeleton_rows: usize,

    // Sorting
    pub(crate) sortable: bool,

    // Expansion
    pub(crate) expandable: bool,
    pub(crate) rows_state: &'a [RowState],
    pub(crate) expandable_content: Option<Box<dyn Fn(&T) -> Text<'static> + 'a>>,
    pub(crate) expanded_height: ExpandedHeight<'a, T>,

    // Pagination
    pub(crate) pagination: Option<Pagination>,
    pub(crate) load_more_label: &'a str,
    pub(crate) sticky_load_more: bool,

    // Chrome
    pub(crate) title: Option<Text<'a>>,
    pub(crate) sticky_header: bool,
    pub(crate) clickable_rows: bool,
    pub(crate) empty_state: Text<'a>,
    pub(crate) text_alignment: CellAlignment,
    pub(crate) borders: bool,
    pub(crate) rounded: bool,
    theme: Option<&'a TableTheme>,
}

impl<'a, T: TableRow> Table<'a, T> {
    pub fn new(rows: &'a [T], columns: &'a [Column]) -> Self {
        Self {
            rows,
            columns,
            loading: false,
            inline_loader: false,
            loading_node: None,
            skeleton_rows: crate::plan::DEFAULT_SKELETON_ROWS,
            sortable: false,
            expandable: false,
            rows_state: &[],
            expandable_content: None,
            expanded_height: ExpandedHeight::Fixed(DEFAULT_EXPANDED_HEIGHT),
            pagination: None,
            load_more_label: "Load more",
            sticky_load_more: false,
            title: None,
            sticky_header: false,
            clickable_rows: false,
            empty_state: Text::from("No data available."),
            text_alignment: CellAlignment::Default,
            borders: false,
            rounded: false,
            theme: None,
        }
    }

    /// Marks a data fetch as pending. Unless [`inline_loader`] is also
    /// set, the rows are replaced by skeleton placeholders.
    ///
    /// [`inline_loader`]: Self::inline_loader
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// While loading, keep the rows visible and show a loader beside the
    /// title instead of the skeleton.
    pub fn inline_loader(mut self, inline: bool) -> Self {
        self.inline_loader = inline;
        self
    }

    /// Note drawn centered over the skeleton while loading.
    pub fn loading_node(mut self, node: impl Into<Text<'a>>) -> Self {
        self.loading_node = Some(node.into());
        self
    }

    /// Number of skeleton placeholder rows (default 3).
    pub fn skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = rows;
        self
    }

    /// Enables sort affordances on header cells. Clicking a non-placeholder
    /// header produces [`TableEvent::SortToggled`](crate::TableEvent);
    /// the caller re-sorts and passes the new direction on its columns.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enables expandable rows. `rows_state` is keyed by row position; a
    /// missing entry defaults to collapsed.
    ///
    /// Position keying means a reorder between renders (after a sort
    /// toggle, say) can attach expansion to the wrong row; callers that
    /// reorder should rebuild `rows_state`, using [`TableRow::id`] as the
    /// stable key.
    pub fn expandable(mut self, rows_state: &'a [RowState]) -> Self {
        self.expandable = true;
        self.rows_state = rows_state;
        self
    }

    /// Renderer for the expandable auxiliary region.
    pub fn expandable_content(mut self, f: impl Fn(&T) -> Text<'static> + 'a) -> Self {
        self.expandable_content = Some(Box::new(f));
        self
    }

    /// Fixed auxiliary region height, in lines.
    pub fn expanded_height(mut self, height: u16) -> Self {
        self.expanded_height = ExpandedHeight::Fixed(height);
        self
    }

    /// Per-row auxiliary region height, computed from the row's data.
    pub fn expanded_height_with(mut self, f: impl Fn(&T) -> u16 + 'a) -> Self {
        self.expanded_height = ExpandedHeight::PerRow(Box::new(f));
        self
    }

    /// Enables "load more" pagination: the rows are truncated to the
    /// cursor's `visible_rows` and a footer trigger is rendered while the
    /// cursor has more.
    pub fn load_more(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Label for the load-more trigger (default "Load more").
    pub fn load_more_label(mut self, label: &'a str) -> Self {
        self.load_more_label = label;
        self
    }

    /// Pins the load-more footer to the bottom of the widget area.
    pub fn sticky_load_more(mut self, sticky: bool) -> Self {
        self.sticky_load_more = sticky;
        self
    }

    /// Title region above the header.
    pub fn title(mut self, title: impl Into<Text<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pins title and header to the top of the widget area while the body
    /// scrolls. Without it, title and header scroll out with the content.
    pub fn sticky_header(mut self, sticky: bool) -> Self {
        self.sticky_header = sticky;
        self
    }

    /// Makes rows clickable, producing
    /// [`TableEvent::RowClicked`](crate::TableEvent). In expandable mode
    /// the click target covers only the first cell's area, so controls the
    /// caller draws in other cells keep their own clicks.
    pub fn clickable_rows(mut self, clickable: bool) -> Self {
        self.clickable_rows = clickable;
        self
    }

    /// Content shown when the row list is empty and nothing is loading.
    pub fn empty_state(mut self, content: impl Into<Text<'a>>) -> Self {
        self.empty_state = content.into();
        self
    }

    /// Alignment of header and body cell content within their columns.
    pub fn text_alignment(mut self, alignment: CellAlignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    /// Draws a border around the widget.
    pub fn borders(mut self, borders: bool) -> Self {
        self.borders = borders;
        self
    }

    /// Draws a rounded border around the widget.
    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    /// Uses the given theme instead of the process-wide default.
    pub fn theme(mut self, theme: &'a TableTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub(crate) fn theme_ref(&self) -> &TableTheme {
        match self.theme {
            Some(theme) => theme,
            None => default_theme(),
        }
    }

    /// Visible columns with their original indices.
    pub(crate) fn visible_columns(&self) -> Vec<(usize, &Column)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visible)
            .collect()
    }

    fn display_flags(&self) -> DisplayFlags {
        DisplayFlags {
            loading: self.loading,
            inline_loader: self.inline_loader,
            expandable: self.expandable,
            pagination: self.pagination,
            skeleton_rows: self.skeleton_rows,
        }
    }

    fn render_title(&self, plan: &RenderPlan, area: Rect, buf: &mut Buffer, state: &TableState) {
        let theme = self.theme_ref();
        if let Some(title) = &self.title {
            Paragraph::new(title.clone())
                .style(theme.title())
                .render(area, buf);
        }
        if plan.loading == LoadingMode::Inline {
            let frame = theme.spinner_frame(state.tick);
            let width = frame.chars().count() as u16;
            if width > 0 && area.width > width {
                buf.set_string(area.right() - width, area.y, frame, theme.title());
            }
        }
    }
}

impl<T: TableRow> StatefulWidget for Table<'_, T> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.layout.clear();
        if area.is_empty() {
            return;
        }
        let theme = self.theme_ref();

        // Surrounding block
        let inner = if self.borders || self.rounded {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border());
            if self.rounded {
                block = block.border_type(BorderType::Rounded);
            }
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        if inner.is_empty() {
            return;
        }
        buf.set_style(inner, theme.base());

        let plan = resolve(self.rows.len(), &self.display_flags());

        if self.expandable && self.expandable_content.is_none() {
            warn!("expandable table without a content renderer; auxiliary regions render empty");
        }

        // Clamp the scroll offset against the plan.
        match plan.body {
            BodyPlan::Rows { visible } => state.offset = state.offset.min(visible.saturating_sub(1)),
            _ => state.offset = 0,
        }

        let cols = self.visible_columns();
        let title_height = self.title.as_ref().map(|t| t.height() as u16).unwrap_or(0);

        // Without a sticky header, title and header scroll out with the
        // content: once the offset is past zero they are gone. With it,
        // both stay pinned and the header sits exactly one title-height
        // below the top, so the two never overlap.
        let chrome = self.sticky_header || state.offset == 0;
        let show_title = chrome && title_height > 0;
        let show_header = chrome && !cols.is_empty();
        let sticky_footer = plan.footer.is_some() && self.sticky_load_more;

        let mut constraints: Vec<Constraint> = Vec::new();
        if show_title {
            constraints.push(Constraint::Length(title_height));
        }
        if show_header {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));
        if sticky_footer {
            constraints.push(Constraint::Length(1));
        }
        let chunks = Layout::vertical(constraints).split(inner);

        let mut idx = 0;
        if show_title {
            self.render_title(&plan, chunks[idx], buf, state);
            idx += 1;
        }
        if show_header {
            header::render_header(&self, &cols, chunks[idx], buf, state);
            idx += 1;
        }
        let body_area = chunks[idx];
        idx += 1;
        let next_y = body::render_body(&self, &plan, &cols, body_area, buf, state);

        if sticky_footer {
            if let Some(f) = plan.footer {
                footer::render_footer(&self, f.fetching, chunks[idx], buf, state);
            }
        } else if let (Some(f), Some(y)) = (plan.footer, next_y) {
            // In-flow footer: directly after the content, when the end of
            // the list is on screen.
            if y < body_area.bottom() {
                let rect = Rect::new(body_area.x, y, body_area.width, 1);
                footer::render_footer(&self, f.fetching, rect, buf, state);
            }
        }
    }
}

impl<T: TableRow> Widget for Table<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = TableState::default();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}
