//! instgen: Generate self-contained infrastructure install scripts from
//! declarative definition files.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

pub use app::commands::generate::{GenOptions, GenOutcome};
pub use domain::{AppError, ComponentSpec, ResolvedDefinition};

/// Resolve a definition file (with includes) into a normalized configuration.
pub fn resolve_definition(definition: &Path) -> Result<ResolvedDefinition, AppError> {
    domain::definition::resolver::resolve(definition, &services::FilesystemDefinitionStore)
}

/// Resolve a definition file and render the result as YAML.
pub fn resolve_to_yaml(definition: &Path) -> Result<String, AppError> {
    app::commands::resolve::execute(definition)
}

/// Generate an install script from a definition file.
///
/// Resolves includes, optionally builds and embeds manifests, embeds
/// component templates, and writes an executable script.
pub fn generate(options: GenOptions) -> Result<GenOutcome, AppError> {
    app::commands::generate::execute(options)
}
