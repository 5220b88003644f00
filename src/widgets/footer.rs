//! Load-more footer rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Paragraph, Widget};

use crate::row::TableRow;
use crate::state::TableState;
use crate::table::Table;

/// Renders the load-more trigger line.
///
/// While a request is in flight the label is replaced by the loader frame
/// and no hit region is recorded: withholding the click binding is what
/// guarantees at most one request in flight per footer.
pub(crate) fn render_footer<T: TableRow>(
    table: &Table<'_, T>,
    fetching: bool,
    area: Rect,
    buf: &mut Buffer,
    state: &mut TableState,
) {
    if area.is_empty() {
        return;
    }
    let theme = table.theme_ref();
    let style = theme.footer();
    buf.set_style(area, style);

    let content = if fetching {
        theme.spinner_frame(state.tick).to_string()
    } else {
        table.load_more_label.to_string()
    };
    Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(style)
        .render(area, buf);

    if !fetching {
        state.layout.footer = Some(area);
    }
}
