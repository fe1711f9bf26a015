//! Materialized rows and cells.

use std::sync::Arc;

use crate::error::TableError;

use super::CellValue;
use super::Column;
use super::Fields;

/// Stable row identifier, assigned by position in the original dataset.
///
/// Ids never change across re-sorts and filters; replacing the dataset
/// reassigns them as a new generation.
pub type RowId = usize;

/// Zero-argument cell display projection, built eagerly at materialization.
pub type CellProjection = Arc<dyn Fn() -> String + Send + Sync>;

/// One field's extracted value plus its display projection.
#[derive(Clone)]
pub struct Cell {
    /// Column (field) name this cell belongs to.
    pub field: String,
    /// The extracted raw field value.
    pub value: CellValue,
    render: CellProjection,
}

impl Cell {
    /// Returns the display text: the raw value's text form, or the column's
    /// custom render projection applied to `(value, original record)`.
    pub fn render(&self) -> String {
        (self.render)()
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("field", &self.field)
            .field("value", &self.value)
            .finish()
    }
}

/// One materialized, display-ready record.
///
/// Carries a stable [`RowId`], the selection flag, the full original record
/// (for custom comparators and filters), and one [`Cell`] per non-hidden
/// column in declaration order.
#[derive(Clone)]
pub struct Row<T: Fields> {
    /// Stable identity within one dataset generation.
    pub id: RowId,
    /// Selection flag, tracked independently of visibility.
    pub selected: bool,
    /// Hidden flag.
    pub hidden: bool,
    /// The raw source record, full field set.
    pub original: T,
    /// Cells in column-declaration order, hidden columns excluded.
    pub cells: Vec<Cell>,
}

impl<T: Fields> std::fmt::Debug for Row<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("selected", &self.selected)
            .field("hidden", &self.hidden)
            .field("cells", &self.cells)
            .finish()
    }
}

/// Binds raw data records to the column schema.
///
/// Re-projects each record's fields strictly onto the declared column order:
/// every declared column (hidden included) must be present on every record,
/// otherwise the whole call fails with [`TableError::SchemaMismatch`]. Extra
/// undeclared fields are ignored. Row ids are assigned by zero-based
/// position in `data`.
///
/// Pure function of its inputs; identical `(columns, data)` pairs produce
/// structurally identical row sets regardless of how the records order
/// their fields internally.
pub fn materialize<T: Fields>(
    columns: &[Column<T>],
    data: &[T],
) -> Result<Vec<Row<T>>, TableError> {
    let mut rows = Vec::with_capacity(data.len());

    for (id, record) in data.iter().enumerate() {
        let mut cells = Vec::with_capacity(columns.len());

        for column in columns {
            let value = record
                .field(&column.name)
                .ok_or_else(|| TableError::schema_mismatch(&column.name, id))?;

            if column.hidden {
                continue;
            }

            let render: CellProjection = match &column.render {
                Some(render) => {
                    let render = render.clone();
                    let value = value.clone();
                    let original = record.clone();
                    Arc::new(move || render(&value, &original))
                }
                None => {
                    let value = value.clone();
                    Arc::new(move || value.text())
                }
            };

            cells.push(Cell {
                field: column.name.clone(),
                value,
                render,
            });
        }

        rows.push(Row {
            id,
            selected: false,
            hidden: false,
            original: record.clone(),
            cells,
        });
    }

    log::trace!(
        "[materialize] {} rows across {} columns",
        rows.len(),
        columns.len()
    );

    Ok(rows)
}
