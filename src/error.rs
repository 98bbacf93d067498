use crate::resource::ResolveError;
use thiserror::Error;

/// Top-level error type for the dotted-config library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("resolver requires an application root or a resource loader")]
    MissingRoot,
}
