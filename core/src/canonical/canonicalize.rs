//! canonical/canonicalize.rs
//! Shape dispatch: one canonical byte form per `Value`.
use log::{trace, warn};

use crate::canonical::format::{format_complex, format_float};
use crate::canonical::structural::encode_structural;
use crate::canonical::types::{CanonicalError, StructuralErrorPolicy, Value};
use crate::constants::DEFAULT_MAX_DEPTH;

/// Canonical byte form of one value. Produced per call, never cached.
pub type CanonicalBytes = Vec<u8>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Canonicalizer {
    /// Maximum number of indirections followed before `TooDeep`.
    pub max_depth: usize,
    pub structural_errors: StructuralErrorPolicy,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            structural_errors: StructuralErrorPolicy::default(),
        }
    }
}

impl Canonicalizer {
    pub fn new(max_depth: Option<usize>, structural_errors: Option<StructuralErrorPolicy>) -> Self {
        Self {
            max_depth: max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            structural_errors: structural_errors.unwrap_or_default(),
        }
    }

    /// Produce the canonical bytes of `value`.
    ///
    /// # Errors
    /// - `NullIndirection` when an indirection on the path is null.
    /// - `UnsupportedShape` for live resources (channels, functions, raw pointers).
    /// - `TooDeep` when more than `max_depth` indirections are chained.
    /// - `Structural` for a failed composite, only under `StructuralErrorPolicy::Strict`.
    pub fn canonicalize(&self, value: &Value) -> Result<CanonicalBytes, CanonicalError> {
        self.canonicalize_at(value, 0)
    }

    fn canonicalize_at(&self, value: &Value, depth: usize) -> Result<CanonicalBytes, CanonicalError> {
        trace!("canonicalize: shape={} depth={}", value.shape(), depth);

        match value {
            Value::Text(s) => Ok(s.as_bytes().to_vec()),
            Value::Signed(i) => Ok(i.to_string().into_bytes()),
            Value::Unsigned(u) => Ok(u.to_string().into_bytes()),
            Value::Float(f) => Ok(format_float(*f).into_bytes()),
            Value::Complex(c) => Ok(format_complex(*c).into_bytes()),
            Value::Bool(b) => Ok(if *b { b"true".to_vec() } else { b"false".to_vec() }),
            Value::Bytes(b) => Ok(b.clone()),
            Value::Sequence(_) | Value::Mapping(_) | Value::Record(_) => self.structural(value, depth),
            Value::Indirection(None) => Err(CanonicalError::NullIndirection),
            Value::Indirection(Some(inner)) => {
                if depth >= self.max_depth {
                    return Err(CanonicalError::TooDeep { max_depth: self.max_depth });
                }
                self.canonicalize_at(inner, depth + 1)
            }
            Value::Unsupported(name) => Err(CanonicalError::UnsupportedShape { shape: name.clone() }),
        }
    }

    /// Reject indirection chains nested in a composite that exceed `max_depth`.
    /// Walks with an explicit stack so the check itself cannot overflow.
    fn check_nested_depth(&self, value: &Value, depth: usize) -> Result<(), CanonicalError> {
        let mut pending = vec![(value, depth)];
        while let Some((v, d)) = pending.pop() {
            match v {
                Value::Indirection(Some(inner)) => {
                    if d >= self.max_depth {
                        return Err(CanonicalError::TooDeep { max_depth: self.max_depth });
                    }
                    pending.push((inner, d + 1));
                }
                Value::Sequence(items) => pending.extend(items.iter().map(|i| (i, d))),
                Value::Mapping(pairs) => pending.extend(pairs.iter().map(|(_, v)| (v, d))),
                Value::Record(record) => pending.extend(record.fields.iter().map(|(_, v)| (v, d))),
                _ => {}
            }
        }
        Ok(())
    }

    fn structural(&self, value: &Value, depth: usize) -> Result<CanonicalBytes, CanonicalError> {
        self.check_nested_depth(value, depth)?;
        match encode_structural(value) {
            Ok(bytes) => Ok(bytes),
            Err(e) => match self.structural_errors {
                StructuralErrorPolicy::Lenient => {
                    warn!("structural encoding of {} failed, emitting empty bytes: {}", value.shape(), e);
                    Ok(Vec::new())
                }
                StructuralErrorPolicy::Strict => Err(CanonicalError::Structural {
                    shape: value.shape(),
                    msg: e.to_string(),
                }),
            },
        }
    }
}

/// Canonicalize with default settings (lenient structural errors, default depth).
pub fn canonicalize(value: &Value) -> Result<CanonicalBytes, CanonicalError> {
    Canonicalizer::default().canonicalize(value)
}
