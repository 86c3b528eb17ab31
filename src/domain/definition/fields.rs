//! Per-field parsers for raw definition mappings.
//!
//! Definition files are duck-typed: most fields accept more than one YAML
//! shape. Each field gets its own coercion function with a named fallback so
//! the malformed-input policy stays independently testable.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::definition::model::ComponentSpec;

/// Default DESCRIPTION when the field is absent.
pub const DEFAULT_DESCRIPTION: &str = "Install infrastructure components";
/// Default METHOD when the field is absent.
pub const DEFAULT_METHOD: &str = "helm";

/// YAML shape name for error messages.
pub(crate) fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Coerce a scalar YAML value to a string. Sequences and mappings yield None.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// FILE_NAME: explicit non-empty value, else the definition file's stem.
pub fn parse_file_name(config: &Mapping, definition_file: &Path) -> String {
    match config.get("FILE_NAME").and_then(scalar_to_string) {
        Some(name) if !name.is_empty() => name,
        _ => definition_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// DESCRIPTION: explicit value, else a fixed default.
pub fn parse_description(config: &Mapping) -> String {
    config
        .get("DESCRIPTION")
        .and_then(scalar_to_string)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}

/// METHOD: explicit value, else "helm".
pub fn parse_method(config: &Mapping) -> String {
    config.get("METHOD").and_then(scalar_to_string).unwrap_or_else(|| DEFAULT_METHOD.to_string())
}

/// Boolean flags (EMBED_MANIFESTS, RELEASE): native bool or the
/// case-insensitive string "true"; anything else is false.
pub fn parse_flag(config: &Mapping, key: &str) -> bool {
    match config.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// TOOLS: comma-separated string (tokens trimmed, empties dropped) or a
/// sequence of scalars (each trimmed). Any other shape yields an empty list.
pub fn parse_tools(config: &Mapping) -> Vec<String> {
    match config.get("TOOLS") {
        Some(Value::String(raw)) => raw
            .split(',')
            .map(str::trim)
            .filter(|tool| !tool.is_empty())
            .map(String::from)
            .collect(),
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(scalar_to_string)
            .map(|tool| tool.trim().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// GLOBAL_ENV: whitespace-separated `KEY=VALUE` tokens (tokens without `=`
/// are ignored) or a mapping with values coerced to strings. Any other shape
/// yields an empty mapping.
pub fn parse_global_env(config: &Mapping) -> BTreeMap<String, String> {
    match config.get("GLOBAL_ENV") {
        Some(Value::String(raw)) => raw
            .split_whitespace()
            .filter_map(|pair| pair.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        Some(Value::Mapping(entries)) => entries
            .iter()
            .filter_map(|(key, value)| Some((scalar_to_string(key)?, scalar_to_string(value)?)))
            .collect(),
        _ => BTreeMap::new(),
    }
}

/// COMPONENTS: required. Entries are bare strings or `{name, env}` mappings;
/// entries of any other shape are skipped.
pub fn parse_components(
    config: &Mapping,
    definition_file: &Path,
) -> Result<Vec<ComponentSpec>, AppError> {
    let value = config.get("COMPONENTS");
    let items = match value {
        None | Some(Value::Null) => {
            return Err(AppError::MissingComponents(definition_file.to_path_buf()));
        }
        Some(Value::Sequence(items)) => {
            if items.is_empty() {
                return Err(AppError::MissingComponents(definition_file.to_path_buf()));
            }
            items
        }
        // An empty or false scalar reads as "nothing declared", not a shape error.
        Some(Value::String(s)) if s.is_empty() => {
            return Err(AppError::MissingComponents(definition_file.to_path_buf()));
        }
        Some(Value::Bool(false)) => {
            return Err(AppError::MissingComponents(definition_file.to_path_buf()));
        }
        Some(_) => return Err(AppError::ComponentsNotAList(definition_file.to_path_buf())),
    };

    let mut components = Vec::new();
    for item in items {
        match item {
            Value::String(name) => components.push(ComponentSpec::new(name.trim())),
            Value::Mapping(entry) => {
                let name = entry
                    .get("name")
                    .and_then(scalar_to_string)
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                let env = match entry.get("env") {
                    Some(Value::Mapping(pairs)) => pairs
                        .iter()
                        .filter_map(|(key, value)| {
                            Some((scalar_to_string(key)?, scalar_to_string(value)?))
                        })
                        .collect(),
                    _ => BTreeMap::new(),
                };
                components.push(ComponentSpec { name, env });
            }
            _ => {}
        }
    }

    Ok(components)
}

/// INCLUDE_DEFINITIONS: absent is empty; present-but-non-sequence is fatal,
/// naming the shape actually found.
pub fn parse_includes(config: &Mapping, definition_file: &Path) -> Result<Vec<String>, AppError> {
    match config.get("INCLUDE_DEFINITIONS") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => Ok(items.iter().filter_map(scalar_to_string).collect()),
        Some(other) => Err(AppError::IncludesNotAList {
            file: definition_file.to_path_buf(),
            found: yaml_type_name(other),
        }),
    }
}
