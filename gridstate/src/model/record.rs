//! Dynamic record type and the dataset field-access trait

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::CellValue;

/// Trait for dataset row types the table engine can materialize.
///
/// The table is generic over its raw record type; the only thing the engine
/// asks of a record is field access by declared column name. Field presence
/// is validated once, at materialization, against the column schema — a
/// record missing a declared field fails the whole materialization with
/// [`TableError::SchemaMismatch`](crate::error::TableError::SchemaMismatch).
///
/// Extra fields a record carries beyond the declared columns are ignored.
///
/// # Example
///
/// ```
/// use gridstate::model::{CellValue, Fields};
///
/// #[derive(Clone)]
/// struct User {
///     first_name: String,
///     last_name: String,
/// }
///
/// impl Fields for User {
///     fn field(&self, name: &str) -> Option<CellValue> {
///         match name {
///             "firstName" => Some(CellValue::from(self.first_name.as_str())),
///             "lastName" => Some(CellValue::from(self.last_name.as_str())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Fields: Clone + Send + Sync + 'static {
    /// Returns the value of the named field, or `None` if the record does
    /// not carry it.
    fn field(&self, name: &str) -> Option<CellValue>;
}

/// A dynamic record holding field values by name.
///
/// Ready-made [`Fields`] implementation for datasets that are not backed by
/// a concrete struct. Field values are held as a `HashMap<String,
/// CellValue>`.
///
/// # Example
///
/// ```
/// use gridstate::model::Record;
///
/// let record = Record::new()
///     .set("firstName", "Frodo")
///     .set("lastName", "Baggins");
///
/// assert_eq!(record.get("firstName").unwrap().text(), "Frodo");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, CellValue>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Sets a field value, consuming and returning the record (builder
    /// style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    /// Returns `true` if the record carries the named field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Fields for Record {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.fields.get(name).cloned()
    }
}

impl Fields for HashMap<String, CellValue> {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).cloned()
    }
}

/// JSON objects bind directly as records: each declared column reads the
/// same-named object member. Non-object values carry no fields, so
/// materializing them fails the schema check.
impl Fields for serde_json::Value {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).map(CellValue::from)
    }
}
