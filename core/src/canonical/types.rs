//! canonical/types.rs
//! Value handle, shape classification and canonicalization errors.
use std::fmt;

use thiserror::Error;

/// Runtime classification of a `Value`. One variant per canonicalization rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Text,
    SignedInteger,
    UnsignedInteger,
    FloatingPoint,
    Complex,
    Boolean,
    ByteSequence,
    OrderedSequence,
    KeyedMapping,
    Record,
    Indirection,
    Unsupported,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Text            => "text",
            ShapeKind::SignedInteger   => "signed integer",
            ShapeKind::UnsignedInteger => "unsigned integer",
            ShapeKind::FloatingPoint   => "floating point",
            ShapeKind::Complex         => "complex",
            ShapeKind::Boolean         => "boolean",
            ShapeKind::ByteSequence    => "byte sequence",
            ShapeKind::OrderedSequence => "ordered sequence",
            ShapeKind::KeyedMapping    => "keyed mapping",
            ShapeKind::Record          => "record",
            ShapeKind::Indirection     => "indirection",
            ShapeKind::Unsupported     => "unsupported",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complex number with f64 parts.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// Named record with fields kept in declaration order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    pub name: String,
    pub fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    /// Append a field, builder style.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// Opaque handle to runtime data of dynamically determined shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Signed(i128),
    Unsigned(u128),
    Float(f64),
    Complex(Complex),
    Bool(bool),
    /// Raw bytes, passed through canonicalization untouched.
    Bytes(Vec<u8>),
    Sequence(Vec<Value>),
    /// Key/value pairs in insertion order.
    Mapping(Vec<(Value, Value)>),
    Record(Record),
    /// Pointer, optional or reference. `None` is a null indirection.
    Indirection(Option<Box<Value>>),
    /// A live resource with no byte mapping; carries the shape name.
    Unsupported(String),
}

impl Value {
    pub fn shape(&self) -> ShapeKind {
        match self {
            Value::Text(_)        => ShapeKind::Text,
            Value::Signed(_)      => ShapeKind::SignedInteger,
            Value::Unsigned(_)    => ShapeKind::UnsignedInteger,
            Value::Float(_)       => ShapeKind::FloatingPoint,
            Value::Complex(_)     => ShapeKind::Complex,
            Value::Bool(_)        => ShapeKind::Boolean,
            Value::Bytes(_)       => ShapeKind::ByteSequence,
            Value::Sequence(_)    => ShapeKind::OrderedSequence,
            Value::Mapping(_)     => ShapeKind::KeyedMapping,
            Value::Record(_)      => ShapeKind::Record,
            Value::Indirection(_) => ShapeKind::Indirection,
            Value::Unsupported(_) => ShapeKind::Unsupported,
        }
    }

    /// Null indirection.
    pub fn null() -> Self {
        Value::Indirection(None)
    }

    /// One level of indirection pointing at `value`.
    pub fn pointer(value: impl Into<Value>) -> Self {
        Value::Indirection(Some(Box::new(value.into())))
    }

    /// Build a keyed mapping from any iterator of pairs.
    pub fn mapping<K, V, I>(pairs: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Build an ordered sequence from any iterator of values.
    pub fn sequence<T, I>(items: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// What to do when the structural view of a composite value fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum StructuralErrorPolicy {
    /// Swallow the failure and emit an empty byte sequence for the value.
    #[default]
    Lenient,
    /// Surface the failure as `CanonicalError::Structural`.
    Strict,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("cannot canonicalize value, it is null")]
    NullIndirection,

    #[error("cannot canonicalize value, unsupported shape {shape}")]
    UnsupportedShape { shape: String },

    #[error("indirection chain deeper than {max_depth} levels")]
    TooDeep { max_depth: usize },

    #[error("structural encoding of {shape} failed: {msg}")]
    Structural { shape: ShapeKind, msg: String },

    #[error("reflection failed: {0}")]
    Reflect(String),
}
