//! Column descriptors, live sort state, and header projections.

use std::cmp::Ordering;
use std::sync::Arc;

use super::CellValue;
use super::Fields;
use super::Row;

/// Comparator over two materialized rows.
pub type SortFn<T> = Arc<dyn Fn(&Row<T>, &Row<T>) -> Ordering + Send + Sync>;

/// Cell render projection: receives the extracted value and the full
/// original record, returns the display text.
pub type CellRenderFn<T> = Arc<dyn Fn(&CellValue, &T) -> String + Send + Sync>;

/// Header render projection: receives the column label.
pub type HeaderRenderFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Column configuration.
///
/// Columns declare the structure of the table: which field of the raw
/// record they read (`name`), the display label, visibility, and optional
/// custom comparator and render projections. Descriptors are immutable once
/// passed to a table; live sort state lives on the engine's internal
/// augmented copy.
///
/// # Examples
///
/// ```
/// use gridstate::model::Column;
/// use gridstate::model::Record;
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("firstName").label("First Name"),
///     Column::new("lastName").label("Last Name"),
///     Column::new("internalId").hidden(),
/// ];
/// ```
pub struct Column<T: Fields> {
    /// Field name this column reads from raw records. Unique per schema.
    pub name: String,
    /// Display label. Defaults to `name`.
    pub label: String,
    /// Hidden columns are validated against records but produce no cells
    /// and no header.
    pub hidden: bool,
    /// Custom comparator; the default text comparator is used when absent.
    pub(crate) sort: Option<SortFn<T>>,
    /// Custom cell render projection.
    pub(crate) render: Option<CellRenderFn<T>>,
    /// Custom header render projection.
    pub(crate) header_render: Option<HeaderRenderFn>,
}

impl<T: Fields> Column<T> {
    /// Creates a new column reading the named field. The label defaults to
    /// the field name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            hidden: false,
            sort: None,
            render: None,
            header_render: None,
        }
    }

    /// Sets the display label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Hides the column. Hidden columns still take part in schema
    /// validation but produce no cells or headers.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Sets a custom comparator for this column.
    ///
    /// The comparator receives two materialized rows (with access to the
    /// full `original` record) and returns the ascending ordering; the
    /// engine inverts it for descending sorts.
    pub fn sort<F>(mut self, sort: F) -> Self
    where
        F: Fn(&Row<T>, &Row<T>) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(sort));
        self
    }

    /// Sets a custom cell render projection.
    ///
    /// Receives the extracted cell value and the full original record.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Sets a custom header render projection, receiving the label.
    pub fn render_header<F>(mut self, render: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.header_render = Some(Arc::new(render));
        self
    }
}

impl<T: Fields> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            label: self.label.clone(),
            hidden: self.hidden,
            sort: self.sort.clone(),
            render: self.render.clone(),
            header_render: self.header_render.clone(),
        }
    }
}

impl<T: Fields> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("hidden", &self.hidden)
            .field("sort", &self.sort.is_some())
            .field("render", &self.render.is_some())
            .field("header_render", &self.header_render.is_some())
            .finish()
    }
}

/// Live sort indicator for a column.
///
/// Only one column shows as sorted at a time; activating a column's sort
/// clears every other column's indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// Whether this column is the active sort column.
    pub on: bool,
    /// Sort direction when active.
    pub asc: bool,
}

/// Internal augmented copy of a column descriptor carrying live sort state.
#[derive(Debug, Clone)]
pub(crate) struct ColumnState<T: Fields> {
    pub(crate) column: Column<T>,
    pub(crate) sorted: SortState,
}

impl<T: Fields> ColumnState<T> {
    pub(crate) fn new(column: Column<T>) -> Self {
        Self {
            column,
            sorted: SortState::default(),
        }
    }
}

/// Header projection for one non-hidden column.
///
/// What renderers read to paint the header row: name, label, the live sort
/// indicator, and the display projection.
#[derive(Clone)]
pub struct Header {
    /// Column (field) name.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Live sort indicator.
    pub sorted: SortState,
    render: Option<HeaderRenderFn>,
}

impl Header {
    pub(crate) fn new(
        name: String,
        label: String,
        sorted: SortState,
        render: Option<HeaderRenderFn>,
    ) -> Self {
        Self {
            name,
            label,
            sorted,
            render,
        }
    }

    /// Returns the display text for this header: the label, or the custom
    /// header projection applied to it.
    pub fn render(&self) -> String {
        match &self.render {
            Some(render) => render(&self.label),
            None => self.label.clone(),
        }
    }
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("sorted", &self.sorted)
            .finish()
    }
}
