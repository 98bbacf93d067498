//! Key resolution within a loaded resource.
//!
//! A key is first tried as a whole, literal string against the current table.
//! Only when that misses is it split on its first `.` and the remainder
//! resolved against the nested value. A table holding both `"a.b"` and
//! `a = { b = .. }` therefore answers `"a.b"` with the literal entry.
//!
//! Arrays are indexed by segments made only of ASCII digits.

use toml::Value;
use tracing::trace;

use super::path::split_path;
use super::ResolveError;

/// Resolves a dotted `key` against `value`.
///
/// Fails with [`ResolveError::KeyNotFound`] when no decomposition of the key
/// matches, and with [`ResolveError::TypeMismatch`] when segments remain but
/// the value reached is a scalar.
pub fn resolve_key<'a>(value: &'a Value, key: &str) -> Result<&'a Value, ResolveError> {
    descend(value, key, key)
}

/// Reports whether [`resolve_key`] would succeed. Never fails.
pub fn key_exists(value: &Value, key: &str) -> bool {
    if child(value, key).is_some() {
        return true;
    }

    match split_path(key) {
        (index, Some(remaining)) => {
            child(value, index).is_some_and(|next| key_exists(next, remaining))
        }
        (_, None) => false,
    }
}

fn descend<'a>(value: &'a Value, key: &str, full: &str) -> Result<&'a Value, ResolveError> {
    if !matches!(value, Value::Table(_) | Value::Array(_)) {
        // `key` is always a suffix of `full`
        let walked = full[..full.len() - key.len()].trim_end_matches('.');
        return Err(ResolveError::TypeMismatch {
            key: walked.to_string(),
            expected: "table or array",
            found: value.type_str(),
        });
    }

    if let Some(found) = child(value, key) {
        return Ok(found);
    }

    match split_path(key) {
        (index, Some(remaining)) => {
            trace!(index, remaining, "descending into nested value");
            let next =
                child(value, index).ok_or_else(|| ResolveError::KeyNotFound(full.to_string()))?;
            descend(next, remaining, full)
        }
        (_, None) => Err(ResolveError::KeyNotFound(full.to_string())),
    }
}

/// Direct lookup of `key` as a single literal entry.
fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Table(table) => table.get(key),
        Value::Array(items) if looks_like_index(key) => {
            key.parse::<usize>().ok().and_then(|i| items.get(i))
        }
        _ => None,
    }
}

fn looks_like_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
