use std::path::{Path, PathBuf};

use super::Resolver;
use crate::resource::{FileLoader, ResourceLoader};
use crate::Error;

/// Builder for constructing a [`Resolver`].
///
/// Either an application root or a custom [`ResourceLoader`] must be given.
/// When both are present the loader wins and the root and extension are
/// ignored.
///
/// ## Example
///
/// ```no_run
/// use dotted_config::Resolver;
///
/// let resolver = Resolver::builder()
///     .with_root("/srv/app")
///     .with_index("config", "etc")
///     .build()?;
///
/// // reads /srv/app/etc/config.toml, then <config.path>/database.toml
/// let host = resolver.get("database.connections.mysql.host")?;
/// # Ok::<(), dotted_config::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ResolverBuilder {
    root: Option<PathBuf>,
    extension: Option<String>,
    index: Option<(String, PathBuf)>,
    loader: Option<Box<dyn ResourceLoader>>,
}

impl ResolverBuilder {
    /// Sets the application root that resource locations are relative to.
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Sets the resource file extension, without the leading dot.
    ///
    /// Defaults to [`FileLoader::DEFAULT_EXTENSION`].
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Sets the name and directory of the index resource.
    ///
    /// The index maps every base name `B` to the sub-location of its
    /// resources under the key `B.path`. Defaults to a resource named
    /// `config` inside the `config` directory.
    pub fn with_index(mut self, name: impl Into<String>, dir: impl AsRef<Path>) -> Self {
        self.index = Some((name.into(), dir.as_ref().to_path_buf()));
        self
    }

    /// Uses a custom loader instead of reading files beneath a root.
    pub fn with_loader(mut self, loader: impl ResourceLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Builds the `Resolver`.
    ///
    /// Returns an error if neither a root nor a loader was provided.
    pub fn build(self) -> Result<Resolver, Error> {
        let loader: Box<dyn ResourceLoader> = match (self.loader, self.root) {
            (Some(loader), _) => loader,
            (None, Some(root)) => {
                let loader = FileLoader::new(root);
                match self.extension {
                    Some(extension) => Box::new(loader.with_extension(extension)),
                    None => Box::new(loader),
                }
            }
            (None, None) => return Err(Error::MissingRoot),
        };

        Ok(Resolver::from_parts(loader, self.index))
    }
}
