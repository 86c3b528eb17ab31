use std::path::Path;

use crate::domain::AppError;

/// Builds a combined YAML manifest from a kustomization source directory.
pub trait ManifestBuilder {
    /// Build the directory and return the manifest stream as text.
    fn build(&self, dir: &Path) -> Result<String, AppError>;
}
