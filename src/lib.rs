//! tabula - data-driven table display widget for ratatui.
//!
//! Renders tabular data with optional sorting affordances, expandable rows,
//! skeleton loading states, and "load more" pagination. Row and column
//! modeling is delegated to ratatui's layout engine; this crate owns
//! display-state resolution and the composition of the title, header, body,
//! and footer regions.

pub mod event;
pub mod plan;
pub mod row;
pub mod state;
pub mod table;
pub mod theme;
mod widgets;

pub use event::TableEvent;
pub use plan::{BodyPlan, DisplayFlags, FooterPlan, LoadingMode, RenderPlan, RowMode, resolve};
pub use row::{CellAlignment, Column, SortDirection, TableRow};
pub use state::{Pagination, RowState, TableState};
pub use table::{ExpandedHeight, Table};
pub use theme::TableTheme;
