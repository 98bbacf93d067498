//! Resource loading and dotted key resolution.

mod error;
mod loader;
mod path;
mod resolve;

pub use error::ResolveError;
pub use loader::{FileLoader, ResourceLoader};
pub use path::{join_key, split_path, validate_path};
pub use resolve::{key_exists, resolve_key};
