//! KServe manifest selection and post-processing.
//!
//! Decides which kustomize source directories to build from a resolved
//! definition and filters the build output. The actual `kustomize build`
//! invocation lives behind the [`ManifestBuilder`] port.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::definition::{ComponentSpec, ResolvedDefinition};
use crate::ports::ManifestBuilder;

/// Separator between documents in a multi-document YAML stream.
pub const YAML_SEPARATOR: &str = "---\n";

/// Environment variable steering llmisvc-only manifest selection.
pub const ENABLE_LLMISVC: &str = "ENABLE_LLMISVC";

/// Components whose env is consulted for [`ENABLE_LLMISVC`].
const KSERVE_COMPONENTS: [&str; 2] = ["kserve-helm", "kserve-kustomize"];

/// The four manifest groups embedded into a generated script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSet {
    pub crd: String,
    pub core: String,
    pub runtime: String,
    pub llmisvcconfig: String,
}

/// Remove CustomResourceDefinition documents from a manifest stream.
pub fn filter_out_crds(manifest: &str) -> String {
    let filtered: Vec<&str> = manifest
        .split(YAML_SEPARATOR)
        .filter(|doc| !doc.trim().is_empty())
        .filter(|doc| {
            !doc.lines()
                .any(|line| line.contains("kind:") && line.contains("CustomResourceDefinition"))
        })
        .collect();
    filtered.join(YAML_SEPARATOR)
}

/// Look up the effective ENABLE_LLMISVC value.
///
/// Priority: kserve component env, then global env, then "false". A
/// component-level "true" short-circuits.
pub fn llmisvc_value(
    global_env: &BTreeMap<String, String>,
    components: &[ComponentSpec],
) -> String {
    let mut llmisvc = "false".to_string();

    for component in components {
        if KSERVE_COMPONENTS.contains(&component.name.as_str()) {
            if let Some(value) = component.env.get(ENABLE_LLMISVC) {
                llmisvc = value.clone();
                if llmisvc == "true" {
                    break;
                }
            }
        }
    }

    if llmisvc == "false" {
        if let Some(value) = global_env.get(ENABLE_LLMISVC) {
            llmisvc = value.clone();
        }
    }

    llmisvc
}

/// Select CRD and config directories under the repository root.
pub fn select_kserve_directories(repo_root: &Path, llmisvc: &str) -> (Vec<PathBuf>, Vec<PathBuf>) {
    if llmisvc == "true" {
        (
            vec![repo_root.join("config/crd/full/llmisvc")],
            vec![repo_root.join("config/overlays/standalone/llmisvc")],
        )
    } else {
        (
            vec![
                repo_root.join("config/crd/full"),
                repo_root.join("config/crd/full/llmisvc"),
                repo_root.join("config/crd/full/localmodel"),
            ],
            vec![repo_root.join("config/overlays/all")],
        )
    }
}

/// Build the CRD, core, runtime, and llmisvcconfig manifest groups.
///
/// Runtime and llmisvcconfig directories are optional; a missing directory
/// yields an empty manifest for that group.
pub fn build_kserve_manifests<B: ManifestBuilder>(
    repo_root: &Path,
    resolved: &ResolvedDefinition,
    builder: &B,
) -> Result<ManifestSet, AppError> {
    let llmisvc = llmisvc_value(&resolved.global_env, &resolved.components);
    let (crd_dirs, config_dirs) = select_kserve_directories(repo_root, &llmisvc);

    let mut crd_manifests = Vec::new();
    for dir in &crd_dirs {
        crd_manifests.push(builder.build(dir)?);
    }

    let mut core_manifests = Vec::new();
    for dir in &config_dirs {
        let full = builder.build(dir)?;
        core_manifests.push(filter_out_crds(&full));
    }

    let runtime_dir = repo_root.join("config/runtimes");
    let runtime =
        if runtime_dir.exists() { builder.build(&runtime_dir)? } else { String::new() };

    let llmisvcconfig_dir = repo_root.join("config/llmisvcconfig");
    let llmisvcconfig =
        if llmisvcconfig_dir.exists() { builder.build(&llmisvcconfig_dir)? } else { String::new() };

    Ok(ManifestSet {
        crd: crd_manifests.join(YAML_SEPARATOR),
        core: core_manifests.join(YAML_SEPARATOR),
        runtime,
        llmisvcconfig,
    })
}
