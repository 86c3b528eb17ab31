//! Ordered last-wins merge primitives.
//!
//! Tools and components merge with the same shape and different identity
//! rules, so both call sites share one keyed primitive.

use crate::domain::definition::model::ComponentSpec;

/// Merge two ordered lists with last-wins identity.
///
/// Elements of `base` matching any element of `incoming` (per `same_key`) are
/// dropped; `incoming` is then appended in full, in order, duplicates within
/// it included. Relative order is otherwise preserved.
pub fn merge_keyed<T>(base: Vec<T>, incoming: Vec<T>, same_key: impl Fn(&T, &T) -> bool) -> Vec<T> {
    let mut merged: Vec<T> =
        base.into_iter().filter(|kept| !incoming.iter().any(|new| same_key(kept, new))).collect();
    merged.extend(incoming);
    merged
}

/// Merge tool lists. Identity is case-insensitive; the surviving occurrence
/// keeps its original casing.
pub fn merge_tools(base: Vec<String>, incoming: Vec<String>) -> Vec<String> {
    merge_keyed(base, incoming, |a, b| a.eq_ignore_ascii_case(b))
}

/// Merge component lists. Identity is the case-sensitive name; an override
/// replaces the whole component, environment included.
pub fn merge_components(
    base: Vec<ComponentSpec>,
    incoming: Vec<ComponentSpec>,
) -> Vec<ComponentSpec> {
    merge_keyed(base, incoming, |a, b| a.name == b.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn merge_tools_without_duplicates_appends() {
        let merged = merge_tools(tools(&["helm", "kubectl"]), tools(&["kustomize", "yq"]));
        assert_eq!(merged, tools(&["helm", "kubectl", "kustomize", "yq"]));
    }

    #[test]
    fn merge_tools_last_wins() {
        let merged = merge_tools(tools(&["helm", "kubectl", "yq"]), tools(&["helm", "kustomize"]));
        assert_eq!(merged, tools(&["kubectl", "yq", "helm", "kustomize"]));
    }

    #[test]
    fn merge_tools_case_insensitive_keeps_incoming_casing() {
        let merged = merge_tools(tools(&["Helm", "kubectl"]), tools(&["helm", "kustomize"]));
        assert_eq!(merged, tools(&["kubectl", "helm", "kustomize"]));
    }

    #[test]
    fn merge_tools_keeps_duplicates_within_incoming() {
        let merged = merge_tools(tools(&["kubectl"]), tools(&["helm", "helm"]));
        assert_eq!(merged, tools(&["kubectl", "helm", "helm"]));
    }

    #[test]
    fn merge_components_without_duplicates_appends() {
        let merged = merge_components(
            vec![ComponentSpec::new("cert-manager"), ComponentSpec::new("istio")],
            vec![ComponentSpec::new("kserve-helm")],
        );
        let names: Vec<_> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["cert-manager", "istio", "kserve-helm"]);
    }

    #[test]
    fn merge_components_override_moves_to_end() {
        let merged = merge_components(
            vec![
                ComponentSpec::new("cert-manager"),
                ComponentSpec::with_env("kserve-helm", [("NAMESPACE", "kserve")]),
                ComponentSpec::new("istio"),
            ],
            vec![ComponentSpec::with_env("kserve-helm", [("NAMESPACE", "custom")])],
        );
        let names: Vec<_> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["cert-manager", "istio", "kserve-helm"]);
        assert_eq!(merged[2].env["NAMESPACE"], "custom");
    }

    #[test]
    fn merge_components_replaces_env_wholesale() {
        let merged = merge_components(
            vec![ComponentSpec::with_env("a", [("V1", "old"), ("V2", "keep")])],
            vec![ComponentSpec::with_env("a", [("V1", "new"), ("V3", "added")])],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].env["V1"], "new");
        assert_eq!(merged[0].env["V3"], "added");
        assert!(!merged[0].env.contains_key("V2"));
    }

    #[test]
    fn merge_components_name_is_case_sensitive() {
        let merged = merge_components(
            vec![ComponentSpec::new("Istio")],
            vec![ComponentSpec::new("istio")],
        );
        assert_eq!(merged.len(), 2);
    }
}
