//! Definition domain: file model, field coercion, merge rules, and the
//! recursive include resolver.

pub mod fields;
pub mod merge;
pub mod model;
pub mod resolver;

pub use model::{ComponentSpec, ResolvedDefinition};
