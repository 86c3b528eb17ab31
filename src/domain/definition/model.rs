//! Definition domain models.

use std::collections::BTreeMap;

use serde::Serialize;

/// A named installable unit carrying its own environment variable mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    /// Component name (case-sensitive identity).
    pub name: String,
    /// Environment variables scoped to this component.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl ComponentSpec {
    /// Create a component with an empty environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), env: BTreeMap::new() }
    }

    /// Create a component with the given environment entries.
    pub fn with_env<K, V>(name: impl Into<String>, env: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            env: env.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Normalized result of resolving one definition file and all of its includes.
///
/// Immutable once constructed; scalar fields always come from the root file
/// of the resolution, never from included files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDefinition {
    /// Output file name (without extension).
    pub file_name: String,
    /// Human-readable script description.
    pub description: String,
    /// Installation method (helm or kustomize).
    pub method: String,
    /// Whether to embed built manifests into the script.
    pub embed_manifests: bool,
    /// Whether to embed component template files. Always true.
    pub embed_templates: bool,
    /// Whether this is a release build (adds the method suffix to the file name).
    pub release: bool,
    /// Required tools, deduplicated, in declaration order.
    pub tools: Vec<String>,
    /// Global environment variables from the root file only.
    pub global_env: BTreeMap<String, String>,
    /// Components, deduplicated by name, in declaration order.
    pub components: Vec<ComponentSpec>,
}
