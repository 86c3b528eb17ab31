//! Include-graph resolution exercised through the library API over real
//! definition trees.

use assert_fs::TempDir;
use assert_fs::prelude::*;

use instgen::{AppError, resolve_definition};

#[test]
fn multiple_includes_merge_in_declaration_order() {
    let temp = TempDir::new().unwrap();
    temp.child("base1.definition")
        .write_str("COMPONENTS:\n  - cert-manager\nTOOLS:\n  - helm\n")
        .unwrap();
    temp.child("base2.definition")
        .write_str("COMPONENTS:\n  - istio\nTOOLS:\n  - kubectl\n")
        .unwrap();
    temp.child("main.definition")
        .write_str(
            "INCLUDE_DEFINITIONS:\n  - ./base1.definition\n  - ./base2.definition\nCOMPONENTS:\n  - kserve-helm\nTOOLS:\n  - kustomize\n",
        )
        .unwrap();

    let resolved = resolve_definition(temp.child("main.definition").path()).unwrap();

    assert_eq!(resolved.tools, vec!["helm", "kubectl", "kustomize"]);
    let names: Vec<_> = resolved.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["cert-manager", "istio", "kserve-helm"]);
}

#[test]
fn later_include_overrides_earlier_include() {
    let temp = TempDir::new().unwrap();
    temp.child("base1.definition")
        .write_str("COMPONENTS:\n  - name: shared\n    env:\n      FROM: base1\n  - only-in-base1\n")
        .unwrap();
    temp.child("base2.definition")
        .write_str("COMPONENTS:\n  - name: shared\n    env:\n      FROM: base2\n")
        .unwrap();
    temp.child("main.definition")
        .write_str(
            "INCLUDE_DEFINITIONS:\n  - ./base1.definition\n  - ./base2.definition\nCOMPONENTS:\n  - own\n",
        )
        .unwrap();

    let resolved = resolve_definition(temp.child("main.definition").path()).unwrap();

    let names: Vec<_> = resolved.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["only-in-base1", "shared", "own"]);
    let shared = resolved.components.iter().find(|c| c.name == "shared").unwrap();
    assert_eq!(shared.env["FROM"], "base2");
}

#[test]
fn deep_chain_accumulates_components_bottom_up() {
    let temp = TempDir::new().unwrap();
    temp.child("c.definition").write_str("COMPONENTS:\n  - cert-manager\n").unwrap();
    temp.child("b.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./c.definition\nCOMPONENTS:\n  - istio\n")
        .unwrap();
    temp.child("a.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./b.definition\nCOMPONENTS:\n  - kserve-helm\n")
        .unwrap();

    let resolved = resolve_definition(temp.child("a.definition").path()).unwrap();

    let names: Vec<_> = resolved.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["cert-manager", "istio", "kserve-helm"]);
}

#[test]
fn include_paths_anchor_to_the_including_file() {
    let temp = TempDir::new().unwrap();
    temp.child("x/y/c.definition").write_str("COMPONENTS:\n  - from-c\n").unwrap();
    temp.child("x/y/b.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./c.definition\nCOMPONENTS:\n  - from-b\n")
        .unwrap();
    temp.child("x/a.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./y/b.definition\nCOMPONENTS:\n  - from-a\n")
        .unwrap();
    // A decoy at the root directory must not be picked up.
    temp.child("x/c.definition").write_str("COMPONENTS:\n  - decoy\n").unwrap();

    let resolved = resolve_definition(temp.child("x/a.definition").path()).unwrap();

    let names: Vec<_> = resolved.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["from-c", "from-b", "from-a"]);
}

#[test]
fn parent_directory_includes_resolve() {
    let temp = TempDir::new().unwrap();
    temp.child("common/base.definition").write_str("COMPONENTS:\n  - shared\n").unwrap();
    temp.child("envs/dev.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ../common/base.definition\nCOMPONENTS:\n  - dev-only\n")
        .unwrap();

    let resolved = resolve_definition(temp.child("envs/dev.definition").path()).unwrap();

    let names: Vec<_> = resolved.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["shared", "dev-only"]);
}

#[test]
fn mutual_inclusion_fails_with_circular_error() {
    let temp = TempDir::new().unwrap();
    temp.child("a.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./b.definition\nCOMPONENTS:\n  - component-a\n")
        .unwrap();
    temp.child("b.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./a.definition\nCOMPONENTS:\n  - component-b\n")
        .unwrap();

    let err = resolve_definition(temp.child("a.definition").path()).unwrap_err();

    assert!(matches!(err, AppError::CircularInclude(_)));
}

#[test]
fn self_inclusion_fails_with_circular_error() {
    let temp = TempDir::new().unwrap();
    temp.child("a.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./a.definition\nCOMPONENTS:\n  - component-a\n")
        .unwrap();

    let err = resolve_definition(temp.child("a.definition").path()).unwrap_err();

    assert!(matches!(err, AppError::CircularInclude(_)));
}

#[test]
fn missing_components_in_included_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    temp.child("base.definition").write_str("TOOLS:\n  - helm\n").unwrap();
    temp.child("main.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./base.definition\nCOMPONENTS:\n  - own\n")
        .unwrap();

    let err = resolve_definition(temp.child("main.definition").path()).unwrap_err();

    assert!(matches!(err, AppError::MissingComponents(_)));
    assert!(err.to_string().contains("base.definition"));
}

#[test]
fn tools_accept_comma_string_in_included_file() {
    let temp = TempDir::new().unwrap();
    temp.child("base.definition")
        .write_str("TOOLS: \"helm, kubectl\"\nCOMPONENTS:\n  - base\n")
        .unwrap();
    temp.child("main.definition")
        .write_str("INCLUDE_DEFINITIONS:\n  - ./base.definition\nTOOLS:\n  - Helm\nCOMPONENTS:\n  - own\n")
        .unwrap();

    let resolved = resolve_definition(temp.child("main.definition").path()).unwrap();

    // Case-insensitive override: the root file's casing survives.
    assert_eq!(resolved.tools, vec!["kubectl", "Helm"]);
}
