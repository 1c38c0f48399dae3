//! The scalar value codec.
//!
//! The codec sits between record properties and storage: `encode` turns a
//! [`Value`] into its storable representation, `decode` turns a stored cell
//! back into a `Value` of the column's declared kind. The storable form is
//! JSON, so any executor that can hold `serde_json::Value` cells works
//! unmodified.

use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};

/// The storable representation of a scalar property value.
pub type Stored = serde_json::Value;

/// Converts property values to and from their storable form.
///
/// Implementations must be two-sided inverses for supported values:
/// `decode(&encode(v), k)` yields `v` back for any non-null `v` of kind `k`.
pub trait ValueCodec {
    /// Encode a value for storage.
    fn encode(&self, value: &Value) -> Stored;

    /// Decode a stored cell into a value of the declared kind.
    ///
    /// A stored JSON null decodes to `Value::Null` for every kind.
    fn decode(&self, stored: &Stored, kind: ValueKind) -> Result<Value>;
}

/// The default codec: stores scalars as their natural JSON forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl ValueCodec for JsonCodec {
    fn encode(&self, value: &Value) -> Stored {
        match value {
            Value::Null => Stored::Null,
            Value::Bool(b) => Stored::Bool(*b),
            Value::Int(i) => Stored::from(*i),
            Value::Float(f) => {
                serde_json::Number::from_f64(*f).map_or(Stored::Null, Stored::Number)
            }
            Value::Text(s) => Stored::String(s.clone()),
            Value::Json(j) => j.clone(),
        }
    }

    fn decode(&self, stored: &Stored, kind: ValueKind) -> Result<Value> {
        if stored.is_null() {
            return Ok(Value::Null);
        }
        let decoded = match kind {
            ValueKind::Bool => stored.as_bool().map(Value::Bool),
            ValueKind::Int => stored.as_i64().map(Value::Int),
            // Integral cells are acceptable for float columns.
            ValueKind::Float => stored.as_f64().map(Value::Float),
            ValueKind::Text => stored.as_str().map(|s| Value::Text(s.to_string())),
            ValueKind::Json => Some(Value::Json(stored.clone())),
        };
        // The engine attaches the column name via `Error::for_column`.
        decoded.ok_or_else(|| Error::Decode {
            column: String::new(),
            detail: format!("stored {stored} is not a valid {kind:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_inverse() {
        let codec = JsonCodec;
        let cases = [
            (Value::Bool(true), ValueKind::Bool),
            (Value::Int(-42), ValueKind::Int),
            (Value::Float(2.25), ValueKind::Float),
            (Value::Text("hello".to_string()), ValueKind::Text),
            (
                Value::Json(serde_json::json!({"a": [1, 2]})),
                ValueKind::Json,
            ),
        ];
        for (value, kind) in cases {
            let stored = codec.encode(&value);
            assert_eq!(codec.decode(&stored, kind).unwrap(), value);
        }
    }

    #[test]
    fn test_null_decodes_to_null_for_any_kind() {
        let codec = JsonCodec;
        assert_eq!(codec.decode(&Stored::Null, ValueKind::Int).unwrap(), Value::Null);
        assert_eq!(codec.decode(&Stored::Null, ValueKind::Text).unwrap(), Value::Null);
    }

    #[test]
    fn test_kind_mismatch_is_an_error() {
        let codec = JsonCodec;
        let stored = Stored::String("not a number".to_string());
        assert!(codec.decode(&stored, ValueKind::Int).is_err());
    }

    #[test]
    fn test_integral_cell_decodes_as_float() {
        let codec = JsonCodec;
        let stored = Stored::from(3_i64);
        assert_eq!(codec.decode(&stored, ValueKind::Float).unwrap(), Value::Float(3.0));
    }
}
