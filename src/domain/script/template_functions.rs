//! Bash getter functions for embedded component templates.

use std::collections::BTreeMap;

/// Convert a template name to its bash getter function name.
///
/// Hyphens become underscores for bash compatibility:
/// `knative-serving-istio` -> `get_knative_serving_istio`.
pub fn function_name(template_name: &str) -> String {
    format!("get_{}", template_name.replace('-', "_"))
}

/// Generate bash getter functions for a component's template files.
///
/// Each template becomes a function printing its content through a quoted
/// heredoc, sorted by template name. Returns an empty string when the
/// component has no templates.
pub fn generate(templates: &BTreeMap<String, String>) -> String {
    if templates.is_empty() {
        return String::new();
    }

    let functions: Vec<String> = templates
        .iter()
        .map(|(name, content)| {
            let eof_marker = format!("{}_EOF", name.replace('-', "_").to_uppercase());
            // The heredoc marker must start a fresh line.
            let newline = if content.ends_with('\n') { "" } else { "\n" };
            format!(
                "{func}() {{\n    cat <<'{eof}'\n{content}{newline}{eof}\n}}",
                func = function_name(name),
                eof = eof_marker,
            )
        })
        .collect();

    functions.join("\n\n")
}
