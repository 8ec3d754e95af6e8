//! Canonical JSON bytes: the one serializer used for hashing.
//!
//! # Rules
//!
//! 1. Object keys sorted by byte order.
//! 2. Compact form, no whitespace (`{"a":1,"b":2}`).
//! 3. Strings escaped per RFC 8259 section 7.
//! 4. Numbers must be integers; floats are rejected.
//! 5. Output is valid UTF-8.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

/// Failure to produce canonical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonError {
    /// A number was not representable as `i64` or `u64`.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    /// `serde` could not convert the value to JSON.
    #[error("value is not representable as JSON: {detail}")]
    Unrepresentable { detail: String },
}

/// Canonical bytes of any `Serialize` value.
///
/// # Errors
///
/// Returns [`CanonError::Unrepresentable`] if `serde_json` rejects the value,
/// or [`CanonError::NonIntegerNumber`] if it contains a float.
pub fn to_canonical_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CanonError> {
    let json = serde_json::to_value(value).map_err(|e| CanonError::Unrepresentable {
        detail: e.to_string(),
    })?;
    canonical_json_bytes(&json)
}

/// Canonical bytes of a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is a float.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Null => buf.extend_from_slice(b"null"),
        serde_json::Value::Bool(true) => buf.extend_from_slice(b"true"),
        serde_json::Value::Bool(false) => buf.extend_from_slice(b"false"),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                let _ = write!(buf, "{i}");
            } else if let Some(u) = n.as_u64() {
                let _ = write!(buf, "{u}");
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        serde_json::Value::String(s) => write_string(buf, s),
        serde_json::Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_string(buf, key);
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => {
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
    buf.push(b'"');
}
