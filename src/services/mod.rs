//! Adapters for the filesystem, kustomize, and template discovery.

mod definition_filesystem;
mod kustomize;
pub mod template_discovery;

pub use definition_filesystem::FilesystemDefinitionStore;
pub use kustomize::KustomizeCli;
