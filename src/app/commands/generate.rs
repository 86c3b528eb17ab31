//! Gen command - resolves a definition and writes the install script.

use std::path::{Path, PathBuf};

use crate::domain::definition::resolver;
use crate::domain::script::{self, ScriptParts};
use crate::domain::{AppError, ResolvedDefinition, manifest};
use crate::ports::ManifestBuilder;
use crate::services::{FilesystemDefinitionStore, KustomizeCli, template_discovery};

/// Options for the gen command.
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Path to the root definition file.
    pub definition: PathBuf,
    /// Directory for the generated script (defaults to the definition's
    /// directory).
    pub output_dir: Option<PathBuf>,
    /// Repository root containing kustomize config directories (defaults to
    /// the current directory; only consulted when EMBED_MANIFESTS is set).
    pub repo_root: Option<PathBuf>,
    /// Directory searched for component templates (defaults to the
    /// definition's directory).
    pub infra_dir: Option<PathBuf>,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenOutcome {
    /// Path of the written script.
    pub script_path: PathBuf,
    /// The resolved configuration the script was generated from.
    pub resolved: ResolvedDefinition,
}

/// Execute the gen command.
pub fn execute(options: GenOptions) -> Result<GenOutcome, AppError> {
    execute_with_builder(options, &KustomizeCli)
}

/// Like [`execute`], with the manifest builder injected for testing.
pub fn execute_with_builder<B: ManifestBuilder>(
    options: GenOptions,
    builder: &B,
) -> Result<GenOutcome, AppError> {
    let resolved = resolver::resolve(&options.definition, &FilesystemDefinitionStore)?;

    let definition_dir =
        options.definition.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    let manifest_functions = if resolved.embed_manifests {
        let repo_root = match &options.repo_root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        let manifests = manifest::build_kserve_manifests(&repo_root, &resolved, builder)?;
        script::manifest_functions::generate(&manifests)
    } else {
        String::new()
    };

    let infra_dir = options.infra_dir.clone().unwrap_or_else(|| definition_dir.clone());
    // Templates from different components sharing a directory collapse into
    // one function per template name.
    let mut templates = std::collections::BTreeMap::new();
    for component in &resolved.components {
        templates
            .extend(template_discovery::discover_component_templates(&component.name, &infra_dir)?);
    }

    let parts = ScriptParts {
        manifest_functions,
        template_functions: script::template_functions::generate(&templates),
    };
    let content = script::assemble(&resolved, &parts)?;

    let output_dir = options.output_dir.clone().unwrap_or(definition_dir);
    std::fs::create_dir_all(&output_dir)?;
    let script_path = output_dir.join(script::script_file_name(&resolved));
    std::fs::write(&script_path, &content)?;

    // Make executable (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&script_path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script_path, perms)?;
    }

    Ok(GenOutcome { script_path, resolved })
}
