//! Display-state resolution: flags in, render plan out.
//!
//! The resolver is a pure function of its inputs. It owns the decision of
//! which body mode applies (skeleton, empty state, or real rows), how many
//! rows are visible under pagination, and whether the footer and title
//! loader appear. Rendering then matches on the plan instead of scattering
//! flag checks.

use tracing::trace;

use crate::state::Pagination;

/// Number of placeholder rows shown while loading, unless overridden.
pub const DEFAULT_SKELETON_ROWS: usize = 3;

/// Flags describing the caller-owned display state for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    /// A data fetch is pending.
    pub loading: bool,
    /// While loading, keep the real rows and show a loader beside the
    /// title instead of replacing the rows with a skeleton.
    pub inline_loader: bool,
    /// Rows carry a collapsible auxiliary region.
    pub expandable: bool,
    /// Incremental "load more" pagination, when enabled.
    pub pagination: Option<Pagination>,
    /// Placeholder row count for the skeleton body.
    pub skeleton_rows: usize,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            loading: false,
            inline_loader: false,
            expandable: false,
            pagination: None,
            skeleton_rows: DEFAULT_SKELETON_ROWS,
        }
    }
}

/// What the body region renders. Exactly one mode applies per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPlan {
    /// Placeholder rows spanning the visible columns; real rows suppressed.
    Skeleton { rows: usize },
    /// The caller-supplied empty-state content; no rows, no skeleton.
    EmptyState,
    /// Real rows, truncated to `visible`.
    Rows { visible: usize },
}

/// How each row renders. Resolved once for the whole row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Plain,
    Expandable,
}

/// How a pending fetch is indicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingMode {
    /// No fetch pending.
    #[default]
    None,
    /// Placeholder rows replace the real rows.
    Skeleton,
    /// Rows stay visible; a loader appears beside the title.
    Inline,
}

/// Footer state carried through from the pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterPlan {
    /// A load-more request is in flight; the trigger is disabled.
    pub fetching: bool,
}

/// The resolved plan for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPlan {
    pub body: BodyPlan,
    pub row_mode: RowMode,
    pub loading: LoadingMode,
    /// Render the load-more footer.
    pub footer: Option<FooterPlan>,
}

/// Resolves the render plan from the row count and display flags.
///
/// Deterministic and side-effect free: the same inputs always produce the
/// same plan, so it can be re-run on every render.
pub fn resolve(row_count: usize, flags: &DisplayFlags) -> RenderPlan {
    let loading = match (flags.loading, flags.inline_loader) {
        (false, _) => LoadingMode::None,
        (true, false) => LoadingMode::Skeleton,
        (true, true) => LoadingMode::Inline,
    };

    let body = if loading == LoadingMode::Skeleton {
        BodyPlan::Skeleton {
            rows: flags.skeleton_rows,
        }
    } else if row_count == 0 {
        BodyPlan::EmptyState
    } else {
        let visible = match flags.pagination {
            Some(p) => p.visible_rows.min(row_count),
            None => row_count,
        };
        BodyPlan::Rows { visible }
    };

    let footer = flags
        .pagination
        .filter(|p| p.has_more)
        .map(|p| FooterPlan {
            fetching: p.is_fetching,
        });

    let plan = RenderPlan {
        body,
        row_mode: if flags.expandable {
            RowMode::Expandable
        } else {
            RowMode::Plain
        },
        loading,
        footer,
    };
    trace!(row_count, ?plan, "resolved render plan");
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginated(visible_rows: usize, has_more: bool, is_fetching: bool) -> DisplayFlags {
        DisplayFlags {
            pagination: Some(Pagination {
                visible_rows,
                has_more,
                is_fetching,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn loading_without_inline_loader_plans_skeleton() {
        let flags = DisplayFlags {
            loading: true,
            ..Default::default()
        };
        let plan = resolve(3, &flags);
        assert_eq!(plan.body, BodyPlan::Skeleton { rows: 3 });
        assert_eq!(plan.loading, LoadingMode::Skeleton);
    }

    #[test]
    fn loading_with_inline_loader_keeps_rows() {
        let flags = DisplayFlags {
            loading: true,
            inline_loader: true,
            ..Default::default()
        };
        let plan = resolve(7, &flags);
        assert_eq!(plan.body, BodyPlan::Rows { visible: 7 });
        assert_eq!(plan.loading, LoadingMode::Inline);
    }

    #[test]
    fn empty_rows_plan_empty_state() {
        let plan = resolve(0, &DisplayFlags::default());
        assert_eq!(plan.body, BodyPlan::EmptyState);
        assert_eq!(plan.loading, LoadingMode::None);
    }

    #[test]
    fn skeleton_wins_over_empty_state() {
        let flags = DisplayFlags {
            loading: true,
            ..Default::default()
        };
        let plan = resolve(0, &flags);
        assert_eq!(plan.body, BodyPlan::Skeleton { rows: 3 });
    }

    #[test]
    fn pagination_truncates_to_visible_rows() {
        let plan = resolve(10, &paginated(5, true, false));
        assert_eq!(plan.body, BodyPlan::Rows { visible: 5 });
    }

    #[test]
    fn visible_rows_beyond_row_count_clamps() {
        let plan = resolve(4, &paginated(100, false, false));
        assert_eq!(plan.body, BodyPlan::Rows { visible: 4 });
    }

    #[test]
    fn unpaginated_shows_all_rows() {
        let plan = resolve(12, &DisplayFlags::default());
        assert_eq!(plan.body, BodyPlan::Rows { visible: 12 });
    }

    #[test]
    fn footer_requires_has_more() {
        assert!(resolve(10, &paginated(5, true, false)).footer.is_some());
        assert!(resolve(10, &paginated(10, false, false)).footer.is_none());
        assert!(resolve(10, &DisplayFlags::default()).footer.is_none());
    }

    #[test]
    fn footer_carries_fetching_state() {
        let plan = resolve(10, &paginated(5, true, true));
        assert_eq!(plan.footer, Some(FooterPlan { fetching: true }));
    }

    #[test]
    fn expandable_flag_selects_row_mode() {
        let flags = DisplayFlags {
            expandable: true,
            ..Default::default()
        };
        assert_eq!(resolve(2, &flags).row_mode, RowMode::Expandable);
        assert_eq!(resolve(2, &DisplayFlags::default()).row_mode, RowMode::Plain);
    }

    #[test]
    fn resolve_is_deterministic() {
        let flags = paginated(3, true, false);
        assert_eq!(resolve(8, &flags), resolve(8, &flags));
    }

    #[test]
    fn exactly_one_body_mode_for_every_flag_combination() {
        for loading in [false, true] {
            for inline_loader in [false, true] {
                for row_count in [0usize, 5] {
                    let flags = DisplayFlags {
                        loading,
                        inline_loader,
                        ..Default::default()
                    };
                    let plan = resolve(row_count, &flags);
                    let skeleton = matches!(plan.body, BodyPlan::Skeleton { .. });
                    let empty = matches!(plan.body, BodyPlan::EmptyState);
                    let rows = matches!(plan.body, BodyPlan::Rows { .. });
                    assert_eq!(
                        [skeleton, empty, rows].iter().filter(|&&b| b).count(),
                        1,
                        "loading={loading} inline={inline_loader} rows={row_count}"
                    );
                    if row_count > 0 && !loading {
                        assert!(rows, "rows must render when data exists and not loading");
                    }
                }
            }
        }
    }
}
