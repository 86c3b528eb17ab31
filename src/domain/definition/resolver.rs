//! Recursive definition resolution with include support.
//!
//! A definition file may pull in other definition files through
//! `INCLUDE_DEFINITIONS`. Includes are resolved depth-first in declaration
//! order; tools and components accumulate across the include graph with
//! last-wins merging, while scalar fields and GLOBAL_ENV always come from
//! the file being resolved, never from its includes.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::domain::definition::fields;
use crate::domain::definition::merge::{merge_components, merge_tools};
use crate::domain::definition::model::{ComponentSpec, ResolvedDefinition};
use crate::ports::DefinitionStore;

/// Resolve a definition file into a normalized configuration.
///
/// Entry point: creates a fresh visited set per call, so concurrent
/// resolutions of different roots are independent.
pub fn resolve<S: DefinitionStore>(
    definition_file: &Path,
    store: &S,
) -> Result<ResolvedDefinition, AppError> {
    let mut visited = HashSet::new();
    resolve_recursive(definition_file, store, &mut visited)
}

/// Resolve an include path relative to the file that declared it.
///
/// Absolute paths pass through unchanged; relative paths anchor to the
/// declaring file's directory, not the process working directory.
pub fn resolve_include_path(include: &str, declaring_file: &Path) -> PathBuf {
    let path = Path::new(include);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let base = declaring_file.parent().unwrap_or_else(|| Path::new("."));
    normalize(&base.join(path))
}

/// Lexically normalize a path, dropping `.` components and folding `..`.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

fn resolve_recursive<S: DefinitionStore>(
    definition_file: &Path,
    store: &S,
    visited: &mut HashSet<PathBuf>,
) -> Result<ResolvedDefinition, AppError> {
    // Canonical path is the identity for cycle detection. The set is never
    // popped, so re-entering a file through any second route is fatal.
    let canonical = store.canonicalize(definition_file)?;
    if !visited.insert(canonical.clone()) {
        return Err(AppError::CircularInclude(canonical));
    }

    let config = store.read_mapping(definition_file)?;

    let includes = fields::parse_includes(&config, definition_file)?;

    let mut merged_tools: Vec<String> = Vec::new();
    let mut merged_components: Vec<ComponentSpec> = Vec::new();

    for include in &includes {
        let included_file = resolve_include_path(include, definition_file);

        if !store.exists(&included_file) {
            return Err(AppError::IncludeNotFound {
                include: include.clone(),
                resolved: included_file,
                referenced_from: definition_file.to_path_buf(),
            });
        }

        // Same visited set instance: cycle detection spans the whole graph.
        let included = resolve_recursive(&included_file, store, visited)?;

        merged_tools = merge_tools(merged_tools, included.tools);
        merged_components = merge_components(merged_components, included.components);
    }

    // The current file's own declarations override anything included.
    let final_tools = merge_tools(merged_tools, fields::parse_tools(&config));
    let final_components =
        merge_components(merged_components, fields::parse_components(&config, definition_file)?);

    Ok(ResolvedDefinition {
        file_name: fields::parse_file_name(&config, definition_file),
        description: fields::parse_description(&config),
        method: fields::parse_method(&config),
        embed_manifests: fields::parse_flag(&config, "EMBED_MANIFESTS"),
        // Component templates are always embedded.
        embed_templates: true,
        release: fields::parse_flag(&config, "RELEASE"),
        tools: final_tools,
        global_env: fields::parse_global_env(&config),
        components: final_components,
    })
}
