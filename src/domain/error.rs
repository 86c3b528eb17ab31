use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for instgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Definition file could not be parsed as YAML.
    #[error("Failed to parse {}: {details}", .file.display())]
    DefinitionParse { file: PathBuf, details: String },

    /// COMPONENTS key absent or empty.
    #[error("Error in {}: COMPONENTS not found", .0.display())]
    MissingComponents(PathBuf),

    /// COMPONENTS present but not a sequence.
    #[error("Error in {}: COMPONENTS must be a list", .0.display())]
    ComponentsNotAList(PathBuf),

    /// INCLUDE_DEFINITIONS present but not a sequence.
    #[error("INCLUDE_DEFINITIONS must be a list in {}, got {found}", .file.display())]
    IncludesNotAList { file: PathBuf, found: &'static str },

    /// An included definition file does not exist on disk.
    #[error(
        "Included definition file not found: {include}\nResolved to: {}\nReferenced from: {}",
        .resolved.display(),
        .referenced_from.display()
    )]
    IncludeNotFound { include: String, resolved: PathBuf, referenced_from: PathBuf },

    /// A definition file was re-entered while still on the active include path.
    #[error("Circular dependency detected: {}", .0.display())]
    CircularInclude(PathBuf),

    /// kustomize build exited non-zero.
    #[error("Failed to run kustomize build on {}: {details}\nstderr: {stderr}", .dir.display())]
    KustomizeFailed { dir: PathBuf, details: String, stderr: String },

    /// kustomize binary is not on PATH.
    #[error("kustomize command not found. Please install kustomize.")]
    KustomizeNotFound,

    /// Install script skeleton failed to render.
    #[error("Failed to render install script template: {0}")]
    ScriptRender(String),

    /// Resolved configuration could not be serialized for output.
    #[error("Failed to serialize resolved definition: {0}")]
    SerializeFailed(String),
}
