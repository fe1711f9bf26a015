//! Headless data-table state engine
//!
//! `gridstate` binds a column schema to a row dataset, derives a
//! presentational row/column model, and manages the transient view state —
//! selection, sorting, free-text search, custom filtering, and pagination —
//! as one consistent pipeline. Rendering layers read the derived
//! [`headers`](Table::headers)/[`rows`](Table::rows) projections and call
//! the mutation operations; nothing here paints anything.
//!
//! Result rows derive from the original set in a fixed order:
//! original rows → sorted rows → filtered rows → searched rows → paginated
//! rows. Every operation that changes a stage input re-runs the chain from
//! the top, so no stale intermediate view ever reaches the renderer.

pub mod engine;
pub mod error;
pub mod model;
pub mod sort;

mod table;

pub use error::TableError;
pub use table::{Pagination, Table, TableOptions};

pub mod prelude {
    //! Prelude module for convenient imports.
    //!
    //! ```ignore
    //! use gridstate::prelude::*;
    //! ```

    pub use crate::engine::{Action, FilterFn, PageCursor};
    pub use crate::error::TableError;
    pub use crate::model::{Cell, CellValue, Column, Fields, Header, Record, Row, RowId, SortState};
    pub use crate::sort::{by_text_ascending, by_text_descending};
    pub use crate::{Pagination, Table, TableOptions};
}
