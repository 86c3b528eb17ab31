use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Read access to definition files on some backing store.
///
/// The resolver only sees this trait; read and parse failures surface
/// unchanged, never reinterpreted.
pub trait DefinitionStore {
    /// Read a definition file and parse it into a YAML mapping.
    fn read_mapping(&self, path: &Path) -> Result<serde_yaml::Mapping, AppError>;

    /// Whether a path exists on the store.
    fn exists(&self, path: &Path) -> bool;

    /// Canonical absolute form of a path, used as identity for cycle
    /// detection.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}
