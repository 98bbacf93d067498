pub mod resolver;
pub mod resource;
mod error;

pub use error::Error;
pub use resolver::{Resolver, ResolverBuilder};
pub use resource::{FileLoader, ResolveError, ResourceLoader};
