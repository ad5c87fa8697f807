//! canonical/structural.rs
//! JSON-equivalent structural view for composite shapes.
//!
//! Rules:
//! - byte sequences nested in composites render as standard base64 strings,
//! - a null indirection renders as `null`, a non-null one is transparent,
//! - mapping keys must be text or integers; they are stringified and sorted,
//! - complex values, non-finite floats and unsupported shapes are errors.
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use crate::canonical::format::format_float;
use crate::canonical::types::Value;
use crate::encoding;

/// Borrowed structural view of a `Value`.
pub(crate) struct Structural<'a>(pub &'a Value);

/// Render `value` through the structural encoder.
pub fn encode_structural(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&Structural(value))
}

fn map_key(key: &Value) -> Result<String, String> {
    match key {
        Value::Text(t) => Ok(t.clone()),
        Value::Signed(i) => Ok(i.to_string()),
        Value::Unsigned(u) => Ok(u.to_string()),
        other => Err(format!("unsupported map key shape: {}", other.shape())),
    }
}

impl Serialize for Structural<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Text(t) => s.serialize_str(t),
            Value::Signed(i) => match i64::try_from(*i) {
                Ok(v) => s.serialize_i64(v),
                Err(_) => s.serialize_i128(*i),
            },
            Value::Unsigned(u) => match u64::try_from(*u) {
                Ok(v) => s.serialize_u64(v),
                Err(_) => s.serialize_u128(*u),
            },
            Value::Float(f) if f.is_finite() => s.serialize_f64(*f),
            Value::Float(f) => Err(S::Error::custom(format!(
                "unsupported value: {}",
                format_float(*f)
            ))),
            Value::Complex(_) => Err(S::Error::custom("unsupported shape: complex")),
            Value::Bool(b) => s.serialize_bool(*b),
            Value::Bytes(b) => s.serialize_str(&encoding::encode(b)),
            Value::Sequence(items) => s.collect_seq(items.iter().map(Structural)),
            Value::Mapping(pairs) => {
                let mut entries = pairs
                    .iter()
                    .map(|(k, v)| map_key(k).map(|k| (k, v)))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(S::Error::custom)?;
                entries.sort_by(|a, b| a.0.cmp(&b.0));

                let mut map = s.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(&k, &Structural(v))?;
                }
                map.end()
            }
            Value::Record(record) => {
                let mut map = s.serialize_map(Some(record.fields.len()))?;
                for (name, v) in &record.fields {
                    map.serialize_entry(name, &Structural(v))?;
                }
                map.end()
            }
            Value::Indirection(None) => s.serialize_unit(),
            Value::Indirection(Some(inner)) => Structural(inner).serialize(s),
            Value::Unsupported(name) => Err(S::Error::custom(format!(
                "unsupported shape: {}",
                name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::types::{Complex, Record};

    fn json(v: &Value) -> String {
        String::from_utf8(encode_structural(v).unwrap()).unwrap()
    }

    #[test]
    fn mapping_keys_are_sorted() {
        let v = Value::mapping([("b", 2), ("a", 1), ("c", 3)]);
        assert_eq!(json(&v), r#"{"a":1,"b":2,"c":3}"#);
    }

    #[test]
    fn integer_keys_are_stringified() {
        let v = Value::mapping([(10u32, "x"), (2u32, "y")]);
        assert_eq!(json(&v), r#"{"10":"x","2":"y"}"#);
    }

    #[test]
    fn record_keeps_declaration_order() {
        let v = Value::Record(Record::new("User").field("name", "Bob").field("age", 25));
        assert_eq!(json(&v), r#"{"name":"Bob","age":25}"#);
    }

    #[test]
    fn nested_bytes_render_as_base64() {
        let v = Value::sequence(vec![Value::from(b"hi".to_vec())]);
        assert_eq!(json(&v), r#"["aGk="]"#);
    }

    #[test]
    fn null_indirection_renders_null() {
        let v = Value::sequence(vec![Value::null(), Value::pointer(7)]);
        assert_eq!(json(&v), "[null,7]");
    }

    #[test]
    fn invalid_members_fail() {
        assert!(encode_structural(&Value::sequence(vec![f64::NAN])).is_err());
        assert!(encode_structural(&Value::sequence(vec![Complex::new(1.0, 1.0)])).is_err());
        assert!(encode_structural(&Value::sequence(vec![Value::function()])).is_err());
        assert!(encode_structural(&Value::mapping([(true, 1)])).is_err());
    }
}
