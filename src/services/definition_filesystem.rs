//! Filesystem-backed definition store.

use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::definition::fields::yaml_type_name;
use crate::ports::DefinitionStore;

/// Reads definition files from disk as YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemDefinitionStore;

impl DefinitionStore for FilesystemDefinitionStore {
    fn read_mapping(&self, path: &Path) -> Result<Mapping, AppError> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_yaml::from_str(&content).map_err(|e| {
            AppError::DefinitionParse { file: path.to_path_buf(), details: e.to_string() }
        })?;
        match value {
            Value::Mapping(mapping) => Ok(mapping),
            // An empty file parses as null; treat it as an empty mapping so
            // the COMPONENTS check produces the specific error.
            Value::Null => Ok(Mapping::new()),
            other => Err(AppError::DefinitionParse {
                file: path.to_path_buf(),
                details: format!(
                    "expected a mapping at the top level, got {}",
                    yaml_type_name(&other)
                ),
            }),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}
