//! Engine state: the single record every operation transitions over.

use std::sync::Arc;

use crate::model::{ColumnState, Fields, Row};

/// Default rows per page when pagination is enabled without an explicit
/// page size.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Custom filter predicate: receives the full post-sort row set and returns
/// the subset to keep.
pub type FilterFn<T> = Arc<dyn Fn(&[Row<T>]) -> Vec<Row<T>> + Send + Sync>;

/// Pagination cursor.
///
/// Bound to the post-search (unpaginated) row count: navigating pages only
/// re-slices, it never re-runs sort/filter/search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page.
    pub per_page: usize,
    /// Whether a further slice exists past the current page.
    pub can_next: bool,
    /// Whether a previous page exists.
    pub can_prev: bool,
}

/// The table engine's single state record.
///
/// The engine conceptually retains every stage view of the pipeline:
/// `original_rows` (the canonical full set after the most recent sort),
/// `unpaginated_rows` (post filter and search), and `rows` (the visible
/// slice). `rows` is always a subsequence of `original_rows`; selection is
/// tracked on row identity and survives every transformation within one
/// dataset generation.
pub(crate) struct TableState<T: Fields> {
    /// Augmented column copies carrying live sort state.
    pub(crate) columns: Vec<ColumnState<T>>,
    /// Canonical full row set, post-sort, pre filter/search/page.
    pub(crate) original_rows: Vec<Row<T>>,
    /// Currently visible rows (post full pipeline).
    pub(crate) rows: Vec<Row<T>>,
    /// Post-search row set the pagination stage slices from.
    pub(crate) unpaginated_rows: Vec<Row<T>>,
    /// All rows currently flagged selected, from the canonical set.
    pub(crate) selected_rows: Vec<Row<T>>,
    /// True iff every currently visible row is selected.
    pub(crate) toggle_all_state: bool,
    /// Name of the active sort column, if any.
    pub(crate) sort_column: Option<String>,
    /// Installed custom filter predicate.
    pub(crate) filter: Option<FilterFn<T>>,
    /// Active search string; empty means no search.
    pub(crate) search_string: String,
    /// Whether pagination is enabled.
    pub(crate) pagination_enabled: bool,
    /// Pagination cursor.
    pub(crate) cursor: PageCursor,
}

impl<T: Fields> TableState<T> {
    /// Seeds a state record before the first pipeline run: empty row views,
    /// identity sort, no filter, no search, page 1.
    pub(crate) fn seed(
        columns: Vec<ColumnState<T>>,
        pagination_enabled: bool,
        per_page: usize,
    ) -> Self {
        Self {
            columns,
            original_rows: Vec::new(),
            rows: Vec::new(),
            unpaginated_rows: Vec::new(),
            selected_rows: Vec::new(),
            toggle_all_state: false,
            sort_column: None,
            filter: None,
            search_string: String::new(),
            pagination_enabled,
            cursor: PageCursor {
                page: 1,
                per_page,
                can_next: true,
                can_prev: false,
            },
        }
    }
}

impl<T: Fields> Clone for TableState<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            original_rows: self.original_rows.clone(),
            rows: self.rows.clone(),
            unpaginated_rows: self.unpaginated_rows.clone(),
            selected_rows: self.selected_rows.clone(),
            toggle_all_state: self.toggle_all_state,
            sort_column: self.sort_column.clone(),
            filter: self.filter.clone(),
            search_string: self.search_string.clone(),
            pagination_enabled: self.pagination_enabled,
            cursor: self.cursor,
        }
    }
}

impl<T: Fields> std::fmt::Debug for TableState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableState")
            .field("columns", &self.columns.len())
            .field("original_rows", &self.original_rows.len())
            .field("rows", &self.rows.len())
            .field("unpaginated_rows", &self.unpaginated_rows.len())
            .field("selected_rows", &self.selected_rows.len())
            .field("toggle_all_state", &self.toggle_all_state)
            .field("sort_column", &self.sort_column)
            .field("search_string", &self.search_string)
            .field("pagination_enabled", &self.pagination_enabled)
            .field("cursor", &self.cursor)
            .finish()
    }
}
