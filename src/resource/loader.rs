//! Resource loading.

use std::path::{Component, Path, PathBuf};

use toml::Table;
use tracing::debug;

use super::ResolveError;

/// Produces the root table of a named resource.
///
/// `base` is the sub-location the resource lives under, relative to whatever
/// root the loader was built with. An empty `base` means the root itself.
pub trait ResourceLoader: Send + Sync + std::fmt::Debug {
    fn load(&self, name: &str, base: &Path) -> Result<Table, ResolveError>;
}

/// A loader that reads TOML files from beneath an application root.
///
/// The resource `name` under `base` is read from
/// `<root>/<base>/<name>.<extension>`. Every call reads the file again.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
    extension: String,
}

impl FileLoader {
    /// Default extension for resource files.
    pub const DEFAULT_EXTENSION: &'static str = "toml";

    /// Creates a loader rooted at `root` using the default extension.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: Self::DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Sets the file extension, without the leading dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Returns the application root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Computes the file location of resource `name` under `base`.
    ///
    /// `base` must stay beneath the root: absolute paths and `..` components
    /// are rejected with [`ResolveError::InvalidPath`].
    pub fn locate(&self, name: &str, base: &Path) -> Result<PathBuf, ResolveError> {
        let escapes = base
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(ResolveError::InvalidPath(base.display().to_string()));
        }

        let mut path = self.root.clone();
        if !base.as_os_str().is_empty() {
            path.push(base);
        }
        path.push(format!("{name}.{}", self.extension));
        Ok(path)
    }
}

impl ResourceLoader for FileLoader {
    fn load(&self, name: &str, base: &Path) -> Result<Table, ResolveError> {
        if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') {
            return Err(ResolveError::InvalidPath(name.to_string()));
        }

        let path = self.locate(name, base)?;
        debug!(resource = name, path = %path.display(), "loading resource");
        load_resource_file(&path)
    }
}

/// Reads and parses a TOML resource file.
///
/// Anything that is not a readable regular file counts as not found.
fn load_resource_file(path: &Path) -> Result<Table, ResolveError> {
    if !path.is_file() {
        return Err(ResolveError::ResourceNotFound(path.to_path_buf()));
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).map_err(|e| ResolveError::ParseError {
            path: path.to_path_buf(),
            source: e,
        }),
        Err(e)
            if matches!(
                e.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
            ) =>
        {
            Err(ResolveError::ResourceNotFound(path.to_path_buf()))
        }
        Err(e) => Err(ResolveError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
