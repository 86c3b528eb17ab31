//! Resolve command - prints the normalized configuration as YAML.

use std::path::Path;

use crate::domain::AppError;
use crate::domain::definition::resolver;
use crate::services::FilesystemDefinitionStore;

/// Resolve a definition file and render the result as YAML.
pub fn execute(definition: &Path) -> Result<String, AppError> {
    let resolved = resolver::resolve(definition, &FilesystemDefinitionStore)?;
    serde_yaml::to_string(&resolved).map_err(|e| AppError::SerializeFailed(e.to_string()))
}
