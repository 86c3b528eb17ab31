//! Component template discovery on the infrastructure directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

const TEMPLATE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "tmpl"];

/// Find a component's `templates/` directory by progressive prefix search.
///
/// For `knative-operator-helm` the candidates are, in order:
/// `knative-operator-helm/templates/`, `knative-operator/templates/`,
/// `knative/templates/`, and finally `templates/` at the infrastructure
/// directory root.
pub fn find_component_template_dir(component_name: &str, infra_dir: &Path) -> Option<PathBuf> {
    let parts: Vec<&str> = component_name.split('-').collect();

    let mut candidates: Vec<PathBuf> =
        (1..=parts.len()).rev().map(|i| infra_dir.join(parts[..i].join("-"))).collect();
    candidates.push(infra_dir.to_path_buf());

    candidates
        .into_iter()
        .map(|base| base.join("templates"))
        .find(|templates_dir| templates_dir.is_dir())
}

/// Read template files from a component's `templates/` directory.
///
/// Collects `.yaml`, `.yml`, and `.tmpl` files; the template name is the
/// file name with those extensions stripped. Returns an empty map when the
/// component has no templates directory.
pub fn discover_component_templates(
    component_name: &str,
    infra_dir: &Path,
) -> Result<BTreeMap<String, String>, AppError> {
    let Some(templates_dir) = find_component_template_dir(component_name, infra_dir) else {
        return Ok(BTreeMap::new());
    };

    let mut templates = BTreeMap::new();
    for entry in std::fs::read_dir(&templates_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !TEMPLATE_EXTENSIONS.contains(&extension) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        templates.insert(stem.to_string(), std::fs::read_to_string(&path)?);
    }

    Ok(templates)
}
