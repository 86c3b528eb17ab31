pub mod definition;
pub mod error;
pub mod manifest;
pub mod script;

pub use definition::{ComponentSpec, ResolvedDefinition};
pub use error::AppError;
