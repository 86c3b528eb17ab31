//! Install script assembly from a resolved definition.
//!
//! Pure string formatting over the minijinja skeleton; all decisions
//! (what to merge, what to embed) happen before this point.

use std::collections::BTreeMap;

use chrono::Utc;
use minijinja::Environment;
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::definition::ResolvedDefinition;

static SKELETON: &str = include_str!("install_script.sh.j2");

/// Pre-rendered bash fragments embedded into the skeleton.
#[derive(Debug, Clone, Default)]
pub struct ScriptParts {
    /// Manifest install/getter functions (empty unless EMBED_MANIFESTS).
    pub manifest_functions: String,
    /// Component template getter functions.
    pub template_functions: String,
}

#[derive(Serialize)]
struct EnvVarContext {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct ComponentContext {
    name: String,
    env: Vec<EnvVarContext>,
}

#[derive(Serialize)]
struct ScriptContext {
    description: String,
    generated_at: String,
    method: String,
    tools: Vec<String>,
    global_env: Vec<EnvVarContext>,
    components: Vec<ComponentContext>,
    embed_manifests: bool,
    manifest_functions: String,
    template_functions: String,
}

fn env_vars(env: &BTreeMap<String, String>) -> Vec<EnvVarContext> {
    env.iter().map(|(name, value)| EnvVarContext { name: name.clone(), value: value.clone() }).collect()
}

/// Output file name for a resolved definition: `<file_name>.sh`, with the
/// method suffix appended for release builds.
pub fn script_file_name(resolved: &ResolvedDefinition) -> String {
    if resolved.release {
        format!("{}-{}.sh", resolved.file_name, resolved.method)
    } else {
        format!("{}.sh", resolved.file_name)
    }
}

/// Render the full install script.
pub fn assemble(resolved: &ResolvedDefinition, parts: &ScriptParts) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("install_script", SKELETON)
        .map_err(|e| AppError::ScriptRender(e.to_string()))?;

    let context = ScriptContext {
        description: resolved.description.clone(),
        generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        method: resolved.method.clone(),
        tools: resolved.tools.clone(),
        global_env: env_vars(&resolved.global_env),
        components: resolved
            .components
            .iter()
            .map(|c| ComponentContext { name: c.name.clone(), env: env_vars(&c.env) })
            .collect(),
        embed_manifests: resolved.embed_manifests,
        manifest_functions: parts.manifest_functions.clone(),
        template_functions: parts.template_functions.clone(),
    };

    let template =
        env.get_template("install_script").map_err(|e| AppError::ScriptRender(e.to_string()))?;
    template.render(&context).map_err(|e| AppError::ScriptRender(e.to_string()))
}
