//! Literal values carried by the IR.
//!
//! A [`Value`] is attached to conditions, SET assignments, insert rows, and
//! upsert assignments. Scalars format to dialect-independent literal text
//! (or to a placeholder under parameterized compilation); compound values
//! (lists, between-bounds, subqueries) are expanded by the compiler, which
//! owns dialect and placeholder state.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::query::Query;

/// A literal (or structural) value in a query.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// SQL `NULL`
    Null,
    /// Renders as `1` / `0`
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point; formats with a `.` decimal separator
    Float(f64),
    /// Exact decimal
    Decimal(Decimal),
    /// Single-quoted with interior quotes doubled
    Text(String),
    /// Renders as `'YYYY-MM-DD'`
    Date(NaiveDate),
    /// Renders as `'YYYY-MM-DD HH:MM:SS'`
    DateTime(NaiveDateTime),
    /// Single-quoted hyphenated form
    Uuid(Uuid),
    /// Single-quoted JSON serialization
    Json(serde_json::Value),
    /// Parenthesized element list, used by `IN`
    List(Vec<Value>),
    /// Two bounds joined by `AND`, used by `BETWEEN`
    Pair(Box<Value>, Box<Value>),
    /// Nested query, compiled recursively with the parent's dialect
    Query(Box<Query>),
    /// Raw SQL fragment spliced verbatim, never quoted or parameterized
    Raw(String),
}

impl Value {
    /// Create a raw SQL fragment.
    ///
    /// The fragment is spliced into the output as-is. This is the escape
    /// hatch for expressions the value model cannot represent; the caller
    /// is responsible for its validity.
    pub fn raw(fragment: impl Into<String>) -> Self {
        Self::Raw(fragment.into())
    }

    /// Check if this value is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for plain literals that become placeholders under parameterized
    /// compilation. `NULL`, raw fragments, and compound values always
    /// render inline.
    pub(crate) fn is_bindable(&self) -> bool {
        !matches!(
            self,
            Self::Null | Self::Raw(_) | Self::List(_) | Self::Pair(_, _) | Self::Query(_)
        )
    }
}

/// Write `text` single-quoted, doubling interior single quotes.
pub(crate) fn push_quoted(out: &mut String, text: &str) {
    out.push('\'');
    for ch in text.chars() {
        out.push(ch);
        if ch == '\'' {
            out.push('\'');
        }
    }
    out.push('\'');
}

macro_rules! int_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.naive_utc())
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<Query> for Value {
    fn from(value: Query) -> Self {
        Self::Query(Box::new(value))
    }
}

/// `None` converts to SQL `NULL`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Value::from(7i8), Value::Int(7));
        assert_eq!(Value::from(7u16), Value::Int(7));
        assert_eq!(Value::from(7i64), Value::Int(7));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(5)), Value::Int(5));
        assert!(Value::from(None::<&str>).is_null());
    }

    #[test]
    fn test_text_conversion() {
        assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
        assert_eq!(Value::from("x".to_string()), Value::Text("x".to_string()));
    }

    #[test]
    fn test_push_quoted_doubles_interior_quotes() {
        let mut out = String::new();
        push_quoted(&mut out, "O'Brien");
        assert_eq!(out, "'O''Brien'");
    }

    #[test]
    fn test_push_quoted_plain() {
        let mut out = String::new();
        push_quoted(&mut out, "Alice");
        assert_eq!(out, "'Alice'");
    }

    #[test]
    fn test_is_bindable() {
        assert!(Value::Int(1).is_bindable());
        assert!(Value::Text("a".to_string()).is_bindable());
        assert!(!Value::Null.is_bindable());
        assert!(!Value::raw("NOW()").is_bindable());
        assert!(!Value::List(vec![]).is_bindable());
        assert!(!Value::Pair(Box::new(Value::Int(1)), Box::new(Value::Int(2))).is_bindable());
    }
}
