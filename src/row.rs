//! Row and column model consumed by the table widget.

use ratatui::layout::Constraint;

/// Trait for table row items.
pub trait TableRow {
    /// Stable identifier for the row, independent of its position.
    fn id(&self) -> u64;

    /// Cell values as strings, one per column, in column order.
    fn cells(&self) -> Vec<String>;

    /// Whether the row gets the highlighted visual treatment.
    fn is_highlighted(&self) -> bool {
        false
    }
}

/// Horizontal alignment of cell content within its column, applied to
/// header and body cells alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlignment {
    /// Right-aligned, except the first visible column which is
    /// left-aligned.
    #[default]
    Default,
    Left,
    Right,
    Center,
}

/// Sort direction of a column, as supplied by the caller.
///
/// The widget never computes sort order; it renders the indicator for
/// whatever direction the caller passes and raises
/// [`TableEvent::SortToggled`](crate::TableEvent::SortToggled) when a
/// sortable header is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

/// A column definition: header label, width constraint, visibility, and
/// the current sort direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Header label. An empty label is a placeholder slot: it renders
    /// nothing and exposes no sort affordance.
    pub label: String,
    /// Width constraint, solved by ratatui's layout engine.
    pub width: Constraint,
    /// Hidden columns are skipped by header, body, and skeleton alike.
    pub visible: bool,
    /// Current sort direction for this column.
    pub sort: SortDirection,
}

impl Column {
    /// Creates a visible, unsorted column that takes a fair share of the
    /// remaining width.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: Constraint::Fill(1),
            visible: true,
            sort: SortDirection::None,
        }
    }

    /// Creates a placeholder header slot (no label, no sort affordance).
    pub fn placeholder() -> Self {
        Self::new("")
    }

    /// Sets the width constraint.
    pub fn width(mut self, width: Constraint) -> Self {
        self.width = width;
        self
    }

    /// Hides the column.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Sets the current sort direction.
    pub fn sort(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_defaults() {
        let col = Column::new("NAME");
        assert_eq!(col.label, "NAME");
        assert_eq!(col.width, Constraint::Fill(1));
        assert!(col.visible);
        assert_eq!(col.sort, SortDirection::None);
    }

    #[test]
    fn column_builder_methods() {
        let col = Column::new("CPU%")
            .width(Constraint::Length(6))
            .sort(SortDirection::Descending)
            .hidden();
        assert_eq!(col.width, Constraint::Length(6));
        assert_eq!(col.sort, SortDirection::Descending);
        assert!(!col.visible);
    }

    #[test]
    fn placeholder_has_empty_label() {
        let col = Column::placeholder();
        assert!(col.label.is_empty());
        assert!(col.visible);
    }
}
