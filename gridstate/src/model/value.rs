//! Value enum for dynamic cell values

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value extracted from a dataset field.
///
/// Cell values are whatever the dataset carries for a declared column. The
/// engine never interprets them beyond their text form: the default
/// comparator and the search stage both operate on [`CellValue::text`].
///
/// # Example
///
/// ```
/// use gridstate::model::CellValue;
///
/// let name = CellValue::from("Frodo");
/// let age = CellValue::from(50i64);
/// let empty = CellValue::Null;
/// assert_eq!(name.text(), "Frodo");
/// assert_eq!(age.text(), "50");
/// assert_eq!(empty.text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    Text(String),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
            CellValue::DateTime(_) => "datetime",
        }
    }

    /// Returns the text form of this value.
    ///
    /// Null renders as the empty string; datetimes render as RFC 3339.
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Returns the uppercased text form, the key the default comparator and
    /// the search stage compare on.
    pub fn sort_key(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(v) => write!(f, "{v}"),
            CellValue::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::DateTime(value)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else {
                    CellValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            // Arrays and nested objects fall back to their JSON text form.
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        CellValue::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_forms() {
        assert_eq!(CellValue::Null.text(), "");
        assert_eq!(CellValue::Bool(true).text(), "true");
        assert_eq!(CellValue::Int(42).text(), "42");
        assert_eq!(CellValue::from("Bilbo").text(), "Bilbo");
    }

    #[test]
    fn test_sort_key_uppercases() {
        assert_eq!(CellValue::from("baggins").sort_key(), "BAGGINS");
    }

    #[test]
    fn test_from_json() {
        let v: serde_json::Value = serde_json::json!({"a": 1});
        assert_eq!(CellValue::from(&v["a"]), CellValue::Int(1));
        assert_eq!(
            CellValue::from(serde_json::Value::Null),
            CellValue::Null
        );
    }
}
