//! Dotted path resolution across separately loaded resources.

mod builder;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use toml::Value;
use tracing::debug;

use crate::resource::{
    join_key, key_exists, resolve_key, split_path, validate_path, FileLoader, ResolveError,
    ResourceLoader,
};

pub use builder::ResolverBuilder;

/// Resolves dotted paths such as `database.connections.mysql.host`.
///
/// The first segment names the resource to load and the rest is resolved as
/// a key inside it. Where a resource lives is looked up per *base* in the
/// index resource: base `B` places its resources under the sub-location
/// stored at `B.path`. The index itself is read directly from its own
/// configured directory.
///
/// Nothing is cached. Every call reloads the index and the target resource.
///
/// ## Example
///
/// ```no_run
/// use dotted_config::Resolver;
///
/// let resolver = Resolver::new("/srv/app");
///
/// let port: u16 = resolver.get_as("database.port")?;
/// let has_host = resolver.has("database", "host")?;
/// let title = resolver.get_in("messages.welcome", "lang")?;
/// # Ok::<(), dotted_config::ResolveError>(())
/// ```
#[derive(Debug)]
pub struct Resolver {
    loader: Box<dyn ResourceLoader>,
    index_name: String,
    index_dir: PathBuf,
}

impl Resolver {
    /// Base used by [`get`](Self::get), [`has`](Self::has) and
    /// [`exists`](Self::exists). Also the default index name and directory.
    pub const DEFAULT_BASE: &'static str = "config";

    /// Creates a new builder for constructing a `Resolver`.
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Creates a resolver reading TOML files beneath `root` with default settings.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::from_parts(Box::new(FileLoader::new(root)), None)
    }

    /// Assembles a resolver, falling back to the default index when `index`
    /// is `None`.
    fn from_parts(loader: Box<dyn ResourceLoader>, index: Option<(String, PathBuf)>) -> Self {
        let (index_name, index_dir) = index.unwrap_or_else(|| {
            (
                Self::DEFAULT_BASE.to_string(),
                PathBuf::from(Self::DEFAULT_BASE),
            )
        });

        Self {
            loader,
            index_name,
            index_dir,
        }
    }

    /// Returns the value at `path` under the default base.
    pub fn get(&self, path: &str) -> Result<Value, ResolveError> {
        self.get_in(path, Self::DEFAULT_BASE)
    }

    /// Returns the value at `path`, loading its resource from `base`'s location.
    ///
    /// A single-segment path returns the whole resource as a table.
    pub fn get_in(&self, path: &str, base: &str) -> Result<Value, ResolveError> {
        validate_path(path)?;
        let location = self.base_location(base)?;

        let (name, residual) = split_path(path);
        let root = Value::Table(self.loader.load(name, &location)?);

        match residual {
            None => Ok(root),
            Some(key) => resolve_key(&root, key)
                .cloned()
                .map_err(|e| e.within(name)),
        }
    }

    /// Returns the value at `path` under the default base, deserialized as `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ResolveError> {
        self.get_as_in(path, Self::DEFAULT_BASE)
    }

    /// Returns the value at `path` under `base`, deserialized as `T`.
    pub fn get_as_in<T: DeserializeOwned>(
        &self,
        path: &str,
        base: &str,
    ) -> Result<T, ResolveError> {
        self.get_in(path, base)?
            .try_into()
            .map_err(|source| ResolveError::DeserializeError {
                path: path.to_string(),
                source,
            })
    }

    /// Checks whether `key` exists within the scope named by `path`, under
    /// the default base.
    ///
    /// See [`has_in`](Self::has_in).
    pub fn has(&self, path: &str, key: &str) -> Result<bool, ResolveError> {
        self.has_in(path, key, Self::DEFAULT_BASE)
    }

    /// Checks whether `key` exists within the scope named by `path`.
    ///
    /// `path` names the resource and optionally a scope inside it; `key` is
    /// appended to that scope. `has_in("database.connections", "mysql", ..)`
    /// tests `connections.mysql` inside the `database` resource.
    ///
    /// Missing keys yield `Ok(false)`. Failing to load the index or the
    /// resource is an error.
    pub fn has_in(&self, path: &str, key: &str, base: &str) -> Result<bool, ResolveError> {
        validate_path(path)?;
        validate_path(key)?;
        let location = self.base_location(base)?;

        let (name, scope) = split_path(path);
        let root = Value::Table(self.loader.load(name, &location)?);

        Ok(key_exists(&root, &join_key(scope, key)))
    }

    /// Checks whether the full dotted `path` exists under the default base.
    pub fn exists(&self, path: &str) -> Result<bool, ResolveError> {
        self.exists_in(path, Self::DEFAULT_BASE)
    }

    /// Checks whether the full dotted `path` exists under `base`.
    ///
    /// A single-segment path is true whenever its resource loads.
    pub fn exists_in(&self, path: &str, base: &str) -> Result<bool, ResolveError> {
        validate_path(path)?;
        let location = self.base_location(base)?;

        let (name, residual) = split_path(path);
        let root = Value::Table(self.loader.load(name, &location)?);

        Ok(residual.map_or(true, |key| key_exists(&root, key)))
    }

    /// Looks up the sub-location configured for `base` in the index resource.
    pub fn base_location(&self, base: &str) -> Result<PathBuf, ResolveError> {
        validate_path(base)?;

        let index = Value::Table(self.loader.load(&self.index_name, &self.index_dir)?);
        let key = format!("{base}.path");

        match resolve_key(&index, &key)? {
            Value::String(location) => {
                debug!(base, location = %location, "resolved base location");
                Ok(PathBuf::from(location))
            }
            other => Err(ResolveError::TypeMismatch {
                key,
                expected: "string",
                found: other.type_str(),
            }),
        }
    }
}
