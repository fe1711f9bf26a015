//! The closed set of operations the engine transitions over.

use crate::model::{Fields, Row, RowId};

use super::state::FilterFn;

/// An operation against the table state.
///
/// Every mutation entry point on [`Table`](crate::Table) dispatches one of
/// these through the single pure transition function. The set is closed:
/// there is no unknown-action fallthrough, matching is exhaustive.
pub enum Action<T: Fields> {
    /// Replace the row set with a freshly materialized generation.
    ///
    /// Selection does not migrate across generations; the full pipeline
    /// re-runs with the active sort, filter, and search, and pagination
    /// resets to page 1.
    SetRows { rows: Vec<Row<T>> },
    /// Toggle or force the sort on a column.
    ///
    /// With `ascending: Some(_)` the direction is used exactly (repeated
    /// identical calls are idempotent); with `None` the previous direction
    /// flips, defaulting to ascending on first activation.
    ToggleSort {
        column: String,
        ascending: Option<bool>,
    },
    /// Install or clear the custom filter predicate.
    SetFilter { filter: Option<FilterFn<T>> },
    /// Set the free-text search string. Empty means no search.
    SetSearchString { search: String },
    /// Toggle selection of the row with the given id.
    SelectRow { id: RowId },
    /// Select every currently visible row, or deselect them all.
    ToggleAll,
    /// Advance the pagination cursor one page.
    NextPage,
    /// Retreat the pagination cursor one page (floors at page 1).
    PrevPage,
}

impl<T: Fields> Action<T> {
    /// Operation name, for logging and error reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetRows { .. } => "set_rows",
            Action::ToggleSort { .. } => "toggle_sort",
            Action::SetFilter { .. } => "set_filter",
            Action::SetSearchString { .. } => "set_search_string",
            Action::SelectRow { .. } => "select_row",
            Action::ToggleAll => "toggle_all",
            Action::NextPage => "next_page",
            Action::PrevPage => "prev_page",
        }
    }
}

impl<T: Fields> std::fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SetRows { rows } => f.debug_struct("SetRows").field("rows", &rows.len()).finish(),
            Action::ToggleSort { column, ascending } => f
                .debug_struct("ToggleSort")
                .field("column", column)
                .field("ascending", ascending)
                .finish(),
            Action::SetFilter { filter } => f
                .debug_struct("SetFilter")
                .field("filter", &filter.is_some())
                .finish(),
            Action::SetSearchString { search } => f
                .debug_struct("SetSearchString")
                .field("search", search)
                .finish(),
            Action::SelectRow { id } => f.debug_struct("SelectRow").field("id", id).finish(),
            Action::ToggleAll => f.write_str("ToggleAll"),
            Action::NextPage => f.write_str("NextPage"),
            Action::PrevPage => f.write_str("PrevPage"),
        }
    }
}
