//! canonical/reflect.rs
//! serde bridge: walk any `Serialize` type into a `Value`.
//!
//! serde's data model plays the role of runtime type inspection here:
//! - sequences whose elements were all serialized as `u8` become byte sequences,
//! - structs become records (field order kept), maps become keyed mappings,
//! - `Option` becomes an indirection, unit becomes a null indirection,
//! - enum variants use the externally tagged layout (`{"Variant": ...}`).
use std::cell::Cell;
use std::fmt::Display;

use serde::ser::{self, Serialize};

use crate::canonical::convert::widen_f32;
use crate::canonical::types::{CanonicalError, Record, Value};

impl ser::Error for CanonicalError {
    fn custom<T: Display>(msg: T) -> Self {
        CanonicalError::Reflect(msg.to_string())
    }
}

impl Value {
    /// Capture the runtime shape of any serializable value.
    pub fn from_serialize<T: ?Sized + Serialize>(value: &T) -> Result<Value, CanonicalError> {
        to_value(value)
    }
}

pub fn to_value<T: ?Sized + Serialize>(value: &T) -> Result<Value, CanonicalError> {
    value.serialize(ValueSerializer::root())
}

/// Serializer producing a `Value`.
///
/// `byte_hint` is set when the value serialized was exactly a `u8`, which lets a
/// parent sequence tell `Vec<u8>` apart from `Vec<u16>`.
#[derive(Copy, Clone)]
struct ValueSerializer<'a> {
    byte_hint: Option<&'a Cell<bool>>,
}

impl ValueSerializer<'static> {
    fn root() -> Self {
        Self { byte_hint: None }
    }
}

fn tagged(variant: &'static str, inner: Value) -> Value {
    Value::Mapping(vec![(Value::Text(variant.into()), inner)])
}

impl<'a> ser::Serializer for ValueSerializer<'a> {
    type Ok = Value;
    type Error = CanonicalError;
    type SerializeSeq = SeqCollector;
    type SerializeTuple = SeqCollector;
    type SerializeTupleStruct = FieldSeqCollector;
    type SerializeTupleVariant = VariantSeqCollector;
    type SerializeMap = MapCollector;
    type SerializeStruct = RecordCollector;
    type SerializeStructVariant = VariantRecordCollector;

    fn serialize_bool(self, v: bool) -> Result<Value, CanonicalError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, CanonicalError> {
        self.serialize_i128(v as i128)
    }

    fn serialize_i16(self, v: i16) -> Result<Value, CanonicalError> {
        self.serialize_i128(v as i128)
    }

    fn serialize_i32(self, v: i32) -> Result<Value, CanonicalError> {
        self.serialize_i128(v as i128)
    }

    fn serialize_i64(self, v: i64) -> Result<Value, CanonicalError> {
        self.serialize_i128(v as i128)
    }

    fn serialize_i128(self, v: i128) -> Result<Value, CanonicalError> {
        Ok(Value::Signed(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, CanonicalError> {
        if let Some(hint) = self.byte_hint {
            hint.set(true);
        }
        Ok(Value::Unsigned(v as u128))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, CanonicalError> {
        self.serialize_u128(v as u128)
    }

    fn serialize_u32(self, v: u32) -> Result<Value, CanonicalError> {
        self.serialize_u128(v as u128)
    }

    fn serialize_u64(self, v: u64) -> Result<Value, CanonicalError> {
        self.serialize_u128(v as u128)
    }

    fn serialize_u128(self, v: u128) -> Result<Value, CanonicalError> {
        Ok(Value::Unsigned(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, CanonicalError> {
        Ok(Value::Float(widen_f32(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, CanonicalError> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, CanonicalError> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, CanonicalError> {
        Ok(Value::Text(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, CanonicalError> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value, CanonicalError> {
        Ok(Value::Indirection(None))
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, CanonicalError> {
        let inner = value.serialize(ValueSerializer::root())?;
        Ok(Value::Indirection(Some(Box::new(inner))))
    }

    fn serialize_unit(self) -> Result<Value, CanonicalError> {
        Ok(Value::Indirection(None))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, CanonicalError> {
        Ok(Value::Record(Record::new(name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, CanonicalError> {
        Ok(Value::Text(variant.into()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, CanonicalError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, CanonicalError> {
        let inner = value.serialize(ValueSerializer::root())?;
        Ok(tagged(variant, inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqCollector, CanonicalError> {
        Ok(SeqCollector::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqCollector, CanonicalError> {
        Ok(SeqCollector::with_capacity(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<FieldSeqCollector, CanonicalError> {
        Ok(FieldSeqCollector::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSeqCollector, CanonicalError> {
        Ok(VariantSeqCollector { variant, seq: FieldSeqCollector::with_capacity(len) })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapCollector, CanonicalError> {
        Ok(MapCollector {
            pairs: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<RecordCollector, CanonicalError> {
        Ok(RecordCollector::new(name, len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantRecordCollector, CanonicalError> {
        Ok(VariantRecordCollector { variant, record: RecordCollector::new(name, len) })
    }
}

// -----------------------------------------------------------------------------
// Compound collectors
// -----------------------------------------------------------------------------

pub struct SeqCollector {
    items: Vec<Value>,
    all_bytes: bool,
}

impl SeqCollector {
    fn with_capacity(len: usize) -> Self {
        Self { items: Vec::with_capacity(len), all_bytes: true }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CanonicalError> {
        let hint = Cell::new(false);
        let v = value.serialize(ValueSerializer { byte_hint: Some(&hint) })?;
        self.all_bytes &= hint.get();
        self.items.push(v);
        Ok(())
    }

    fn finish(self) -> Value {
        // An empty sequence carries no element type; it stays an ordered sequence.
        if self.all_bytes && !self.items.is_empty() {
            let bytes = self
                .items
                .into_iter()
                .filter_map(|v| match v {
                    Value::Unsigned(n) => u8::try_from(n).ok(),
                    _ => None,
                })
                .collect();
            Value::Bytes(bytes)
        } else {
            Value::Sequence(self.items)
        }
    }
}

impl ser::SerializeSeq for SeqCollector {
    type Ok = Value;
    type Error = CanonicalError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CanonicalError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, CanonicalError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqCollector {
    type Ok = Value;
    type Error = CanonicalError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CanonicalError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, CanonicalError> {
        Ok(self.finish())
    }
}

/// Positional struct fields. Never collapses into a byte sequence.
pub struct FieldSeqCollector {
    items: Vec<Value>,
}

impl FieldSeqCollector {
    fn with_capacity(len: usize) -> Self {
        Self { items: Vec::with_capacity(len) }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CanonicalError> {
        self.items.push(value.serialize(ValueSerializer::root())?);
        Ok(())
    }

    fn finish(self) -> Value {
        Value::Sequence(self.items)
    }
}

impl ser::SerializeTupleStruct for FieldSeqCollector {
    type Ok = Value;
    type Error = CanonicalError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CanonicalError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, CanonicalError> {
        Ok(self.finish())
    }
}

pub struct VariantSeqCollector {
    variant: &'static str,
    seq: FieldSeqCollector,
}

impl ser::SerializeTupleVariant for VariantSeqCollector {
    type Ok = Value;
    type Error = CanonicalError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CanonicalError> {
        self.seq.push(value)
    }

    fn end(self) -> Result<Value, CanonicalError> {
        Ok(tagged(self.variant, self.seq.finish()))
    }
}

pub struct MapCollector {
    pairs: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for MapCollector {
    type Ok = Value;
    type Error = CanonicalError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), CanonicalError> {
        self.pending_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CanonicalError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| CanonicalError::Reflect("map value without a key".into()))?;
        self.pairs.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value, CanonicalError> {
        Ok(Value::Mapping(self.pairs))
    }
}

pub struct RecordCollector {
    record: Record,
}

impl RecordCollector {
    fn new(name: &'static str, len: usize) -> Self {
        Self {
            record: Record { name: name.into(), fields: Vec::with_capacity(len) },
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), CanonicalError> {
        self.record.fields.push((key.into(), to_value(value)?));
        Ok(())
    }
}

impl ser::SerializeStruct for RecordCollector {
    type Ok = Value;
    type Error = CanonicalError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CanonicalError> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value, CanonicalError> {
        Ok(Value::Record(self.record))
    }
}

pub struct VariantRecordCollector {
    variant: &'static str,
    record: RecordCollector,
}

impl ser::SerializeStructVariant for VariantRecordCollector {
    type Ok = Value;
    type Error = CanonicalError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CanonicalError> {
        self.record.push(key, value)
    }

    fn end(self) -> Result<Value, CanonicalError> {
        Ok(tagged(self.variant, Value::Record(self.record.record)))
    }
}
