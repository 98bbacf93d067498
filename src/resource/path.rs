//! Dotted path helpers.
//!
//! Each call to [`split_path`] peels exactly one segment off the front of a
//! path. The remainder is handed back joined, so callers that descend through
//! nested tables re-split it one level at a time.

use std::borrow::Cow;

use super::ResolveError;

/// Splits a dotted path on its first `.`.
///
/// Returns the leading segment and the joined remainder, or `None` as the
/// remainder when the path has no dot at all.
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

/// Appends `key` to an optional dotted scope.
pub fn join_key<'a>(scope: Option<&str>, key: &'a str) -> Cow<'a, str> {
    match scope {
        Some(scope) => Cow::Owned(format!("{scope}.{key}")),
        None => Cow::Borrowed(key),
    }
}

/// Rejects empty paths and paths with empty segments.
///
/// This covers leading, trailing and doubled dots.
pub fn validate_path(path: &str) -> Result<(), ResolveError> {
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return Err(ResolveError::InvalidPath(path.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_non_dotted() {
        assert_eq!(split_path("database"), ("database", None));
        assert_eq!(split_path(""), ("", None));
    }

    #[test]
    fn test_split_peels_one_segment() {
        assert_eq!(split_path("a.b.c"), ("a", Some("b.c")));
        assert_eq!(split_path("b.c"), ("b", Some("c")));
    }

    #[test]
    fn test_join_key() {
        assert_eq!(join_key(None, "host"), "host");
        assert_eq!(join_key(Some("db.primary"), "host"), "db.primary.host");
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("database").is_ok());
        assert!(validate_path("database.connections.mysql").is_ok());

        for bad in ["", ".foo", "foo.", "a..b", "."] {
            assert!(
                matches!(validate_path(bad), Err(ResolveError::InvalidPath(p)) if p == bad),
                "{bad:?} should be rejected"
            );
        }
    }
}
