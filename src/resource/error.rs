use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("resource file not found: {0}")]
    ResourceNotFound(PathBuf),

    #[error("failed to read resource file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse resource file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    #[error("expected {expected} at '{key}', found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to deserialize value at '{path}': {source}")]
    DeserializeError {
        path: String,
        source: toml::de::Error,
    },
}

impl ResolveError {
    /// Prefixes the key carried by `KeyNotFound` and `TypeMismatch` with the
    /// name of the resource it was resolved in.
    pub(crate) fn within(self, resource: &str) -> Self {
        let qualify = |key: String| {
            if key.is_empty() {
                resource.to_string()
            } else {
                format!("{resource}.{key}")
            }
        };

        match self {
            Self::KeyNotFound(key) => Self::KeyNotFound(qualify(key)),
            Self::TypeMismatch {
                key,
                expected,
                found,
            } => Self::TypeMismatch {
                key: qualify(key),
                expected,
                found,
            },
            other => other,
        }
    }
}
