//! The table handle: construction, read projections, and mutations.

use crate::engine::{reduce, Action, FilterFn, PageCursor, TableState, DEFAULT_PER_PAGE};
use crate::error::TableError;
use crate::model::{materialize, Column, ColumnState, Fields, Header, Row, RowId};

/// Pagination configuration for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pagination {
    /// No pagination: every post-search row is visible.
    #[default]
    Disabled,
    /// Paginate with the default page size of 10.
    Enabled,
    /// Paginate with an explicit page size.
    PerPage(usize),
}

/// Construction options for a table.
///
/// `selectable` and `sortable` are renderer hints only — the selection and
/// sorting APIs are always available; the flags just signal intent to the
/// consuming render layer.
pub struct TableOptions<T: Fields> {
    /// Renderer hint: this table intends row selection.
    pub selectable: bool,
    /// Renderer hint: this table intends sortable headers.
    pub sortable: bool,
    /// Custom filter predicate installed after the first pipeline run.
    pub filter: Option<FilterFn<T>>,
    /// Pagination configuration.
    pub pagination: Pagination,
}

impl<T: Fields> TableOptions<T> {
    /// Creates the default options: no hints, no filter, no pagination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the table as selectable (renderer hint).
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Marks the table as sortable (renderer hint).
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Installs a custom filter predicate over the full post-sort row set.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&[Row<T>]) -> Vec<Row<T>> + Send + Sync + 'static,
    {
        self.filter = Some(std::sync::Arc::new(filter));
        self
    }

    /// Sets the pagination configuration.
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }
}

impl<T: Fields> Default for TableOptions<T> {
    fn default() -> Self {
        Self {
            selectable: false,
            sortable: false,
            filter: None,
            pagination: Pagination::Disabled,
        }
    }
}

/// A headless data table.
///
/// Binds a column schema to a row dataset, derives the presentational
/// row/column model, and manages selection, sorting, text search, custom
/// filtering, and pagination as one fixed-order pipeline
/// (sort → filter → search → paginate).
///
/// The handle owns its state exclusively. Every mutation dispatches an
/// [`Action`] through the pure transition function and commits the new
/// state only on success, so a failed operation leaves the previous state
/// untouched.
///
/// # Example
///
/// ```
/// use gridstate::model::{Column, Record};
/// use gridstate::Table;
///
/// let columns = vec![
///     Column::new("firstName").label("First Name"),
///     Column::new("lastName").label("Last Name"),
/// ];
/// let data = vec![
///     Record::new().set("firstName", "Frodo").set("lastName", "Baggins"),
///     Record::new().set("firstName", "Samwise").set("lastName", "Gamgee"),
/// ];
///
/// let mut table = Table::new(columns, &data)?;
/// assert_eq!(table.headers().len(), 2);
/// assert_eq!(table.rows().len(), 2);
/// assert_eq!(table.rows()[0].cells[0].value.text(), "Frodo");
///
/// table.toggle_sort("lastName", None)?;
/// assert_eq!(table.rows()[0].cells[1].value.text(), "Baggins");
/// # Ok::<(), gridstate::TableError>(())
/// ```
pub struct Table<T: Fields> {
    state: TableState<T>,
    selectable: bool,
    sortable: bool,
}

impl<T: Fields> Table<T> {
    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Creates a table with default options.
    ///
    /// Fails with [`TableError::SchemaMismatch`] if any record is missing a
    /// declared column.
    pub fn new(columns: Vec<Column<T>>, data: &[T]) -> Result<Self, TableError> {
        Self::with_options(columns, data, TableOptions::new())
    }

    /// Creates a table with explicit options.
    ///
    /// Runs the row materializer, then seeds the full pipeline with
    /// identity sort, no search, page 1, and the options' filter (if any).
    pub fn with_options(
        columns: Vec<Column<T>>,
        data: &[T],
        options: TableOptions<T>,
    ) -> Result<Self, TableError> {
        let rows = materialize(&columns, data)?;

        let (pagination_enabled, per_page) = match options.pagination {
            Pagination::Disabled => (false, DEFAULT_PER_PAGE),
            Pagination::Enabled => (true, DEFAULT_PER_PAGE),
            Pagination::PerPage(per_page) => (true, per_page),
        };

        let column_states = columns.into_iter().map(ColumnState::new).collect();
        let state = TableState::seed(column_states, pagination_enabled, per_page);

        let mut table = Self {
            state,
            selectable: options.selectable,
            sortable: options.sortable,
        };
        table.dispatch(Action::SetRows { rows })?;
        if options.filter.is_some() {
            table.dispatch(Action::SetFilter {
                filter: options.filter,
            })?;
        }
        Ok(table)
    }

    /// Dispatches an action through the transition function, committing the
    /// new state only on success.
    pub fn dispatch(&mut self, action: Action<T>) -> Result<(), TableError> {
        let next = reduce(&self.state, action)?;
        self.state = next;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Read projections
    // -------------------------------------------------------------------------

    /// Ordered list of non-hidden column headers with live sort state.
    pub fn headers(&self) -> Vec<Header> {
        self.state
            .columns
            .iter()
            .filter(|cs| !cs.column.hidden)
            .map(|cs| {
                Header::new(
                    cs.column.name.clone(),
                    cs.column.label.clone(),
                    cs.sorted,
                    cs.column.header_render.clone(),
                )
            })
            .collect()
    }

    /// Currently visible rows (post full pipeline).
    pub fn rows(&self) -> &[Row<T>] {
        &self.state.rows
    }

    /// Full post-sort row set, before filter, search, and pagination.
    pub fn original_rows(&self) -> &[Row<T>] {
        &self.state.original_rows
    }

    /// All rows currently flagged selected, independent of visibility.
    pub fn selected_rows(&self) -> &[Row<T>] {
        &self.state.selected_rows
    }

    /// True iff every currently visible row is selected.
    pub fn toggle_all_state(&self) -> bool {
        self.state.toggle_all_state
    }

    /// The pagination cursor, present only when pagination is enabled.
    pub fn pagination(&self) -> Option<&PageCursor> {
        self.state.pagination_enabled.then_some(&self.state.cursor)
    }

    /// The active search string; empty means no search.
    pub fn search_string(&self) -> &str {
        &self.state.search_string
    }

    /// Renderer hint: whether this table intends row selection.
    pub fn selectable(&self) -> bool {
        self.selectable
    }

    /// Renderer hint: whether this table intends sortable headers.
    pub fn sortable(&self) -> bool {
        self.sortable
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replaces the dataset with a new generation.
    ///
    /// Re-materializes against the current schema (fails with
    /// [`TableError::SchemaMismatch`] on a bad record, leaving the previous
    /// state intact), reassigns ids positionally, clears selection, re-runs
    /// the full pipeline with the active sort, filter, and search, and
    /// resets pagination to page 1.
    pub fn replace_data(&mut self, data: &[T]) -> Result<(), TableError> {
        let columns: Vec<Column<T>> = self
            .state
            .columns
            .iter()
            .map(|cs| cs.column.clone())
            .collect();
        let rows = materialize(&columns, data)?;
        self.dispatch(Action::SetRows { rows })
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggles selection of the row with the given id in every retained
    /// view. Unknown ids are a no-op.
    pub fn select_row(&mut self, id: RowId) {
        if let Ok(next) = reduce(&self.state, Action::SelectRow { id }) {
            self.state = next;
        }
    }

    /// Selects every currently visible row if fewer are selected than
    /// visible, otherwise deselects the visible rows.
    pub fn toggle_all(&mut self) {
        if let Ok(next) = reduce(&self.state, Action::ToggleAll) {
            self.state = next;
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Toggles or forces the sort on a column.
    ///
    /// With `ascending: Some(_)` the direction is used exactly (repeated
    /// identical calls are idempotent); with `None` the previous direction
    /// flips, defaulting to ascending on first activation. Fails with
    /// [`TableError::UnknownColumn`] if the column is not declared.
    pub fn toggle_sort(
        &mut self,
        column: &str,
        ascending: Option<bool>,
    ) -> Result<(), TableError> {
        self.dispatch(Action::ToggleSort {
            column: column.to_string(),
            ascending,
        })
    }

    // -------------------------------------------------------------------------
    // Filtering & search
    // -------------------------------------------------------------------------

    /// Installs a custom filter predicate over the full post-sort row set.
    ///
    /// Previously selected rows present in the filtered output stay
    /// selected.
    pub fn set_filter<F>(&mut self, filter: F)
    where
        F: Fn(&[Row<T>]) -> Vec<Row<T>> + Send + Sync + 'static,
    {
        if let Ok(next) = reduce(
            &self.state,
            Action::SetFilter {
                filter: Some(std::sync::Arc::new(filter)),
            },
        ) {
            self.state = next;
        }
    }

    /// Clears the custom filter predicate.
    pub fn clear_filter(&mut self) {
        if let Ok(next) = reduce(&self.state, Action::SetFilter { filter: None }) {
            self.state = next;
        }
    }

    /// Sets the free-text search string. Matching is a case-insensitive
    /// substring test against every cell's value text; the empty string
    /// clears the search.
    pub fn set_search_string(&mut self, search: impl Into<String>) {
        if let Ok(next) = reduce(
            &self.state,
            Action::SetSearchString {
                search: search.into(),
            },
        ) {
            self.state = next;
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Advances the pagination cursor one page (re-slice only; sort,
    /// filter, and search are not re-run). Advancing past the last page
    /// yields an empty visible slice.
    ///
    /// Fails with [`TableError::InvalidOperation`] when pagination is
    /// disabled.
    pub fn next_page(&mut self) -> Result<(), TableError> {
        self.dispatch(Action::NextPage)
    }

    /// Retreats the pagination cursor one page, flooring at page 1.
    ///
    /// Fails with [`TableError::InvalidOperation`] when pagination is
    /// disabled.
    pub fn prev_page(&mut self) -> Result<(), TableError> {
        self.dispatch(Action::PrevPage)
    }
}

impl<T: Fields> std::fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("state", &self.state)
            .field("selectable", &self.selectable)
            .field("sortable", &self.sortable)
            .finish()
    }
}
