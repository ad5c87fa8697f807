//! canonical/convert.rs
//! Conversions from native Rust values into `Value`.
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::{mpsc, Arc};

use crate::canonical::types::{Complex, Record, Value};
use crate::constants::shape_names;

impl Value {
    /// A function value. Never canonicalizable.
    pub fn function() -> Self {
        Value::Unsupported(shape_names::FUNC.into())
    }

    /// A raw pointer value. Never canonicalizable.
    pub fn unsafe_pointer() -> Self {
        Value::Unsupported(shape_names::UNSAFE_POINTER.into())
    }

    /// Opaque handle to a type with no byte mapping, named after `T`.
    pub fn opaque<T: ?Sized>() -> Self {
        Value::Unsupported(std::any::type_name::<T>().into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Signed(v as i128)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Unsigned(v as u128)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, i128, isize);
from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(widen_f32(v))
    }
}

/// Widen through the shortest decimal form so `3.1f32` stays `3.1`.
pub(crate) fn widen_f32(v: f32) -> f64 {
    v.to_string().parse::<f64>().unwrap_or(f64::from(v))
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Complex> for Value {
    fn from(v: Complex) -> Self {
        Value::Complex(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

// --- Byte sequences ---

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(v: [u8; N]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(v: &[u8; N]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

// --- Composites ---

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v)
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Value::mapping(v)
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Value::mapping(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match v {
            Json::Null => Value::Indirection(None),
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::Unsigned(u as u128)
                } else if let Some(i) = n.as_i64() {
                    Value::Signed(i as i128)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::sequence(items),
            Json::Object(map) => Value::mapping(map),
        }
    }
}

// --- Indirections ---

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Indirection(v.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(v: Box<T>) -> Self {
        Value::pointer(*v)
    }
}

impl<T: Clone + Into<Value>> From<Rc<T>> for Value {
    fn from(v: Rc<T>) -> Self {
        Value::pointer(T::clone(&v))
    }
}

impl<T: Clone + Into<Value>> From<Arc<T>> for Value {
    fn from(v: Arc<T>) -> Self {
        Value::pointer(T::clone(&v))
    }
}

// --- Live channels: no byte mapping ---

macro_rules! from_channel {
    ($($t:ty),*) => {
        $(impl<T> From<$t> for Value {
            fn from(_: $t) -> Self {
                Value::Unsupported(shape_names::CHAN.into())
            }
        })*
    };
}

from_channel!(
    mpsc::Sender<T>,
    mpsc::SyncSender<T>,
    mpsc::Receiver<T>,
    crossbeam::channel::Sender<T>,
    crossbeam::channel::Receiver<T>
);
