//! Data model: dynamic values, records, column schema, and materialized rows.

mod column;
mod record;
mod row;
mod value;

pub use column::{CellRenderFn, Column, Header, HeaderRenderFn, SortFn, SortState};
pub(crate) use column::ColumnState;
pub use record::{Fields, Record};
pub use row::{materialize, Cell, CellProjection, Row, RowId};
pub use value::CellValue;
