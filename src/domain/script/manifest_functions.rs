//! Bash functions embedding built KServe manifests into a script.

use crate::domain::manifest::ManifestSet;

/// Generate the manifest install/uninstall functions and heredoc getters.
///
/// Getter functions use quoted heredocs so manifest content passes through
/// without shell expansion. Runtime and llmisvcconfig getters are emitted
/// only when their manifests are non-empty; the matching create functions
/// are always emitted.
pub fn generate(manifests: &ManifestSet) -> String {
    let runtime_getter = if manifests.runtime.is_empty() {
        String::new()
    } else {
        format!(
            "get_kserve_runtime_manifests() {{\n    cat <<'KSERVE_RUNTIME_MANIFEST_EOF'\n{}KSERVE_RUNTIME_MANIFEST_EOF\n}}\n\n",
            manifests.runtime
        )
    };

    let llmisvcconfig_getter = if manifests.llmisvcconfig.is_empty() {
        String::new()
    } else {
        format!(
            "get_kserve_llmisvcconfig_manifests() {{\n    cat <<'KSERVE_LLMISVCCONFIG_MANIFEST_EOF'\n{}KSERVE_LLMISVCCONFIG_MANIFEST_EOF\n}}\n\n",
            manifests.llmisvcconfig
        )
    };

    let runtime_create = "create_kserve_runtime_manifests() {\n    get_kserve_runtime_manifests | kubectl apply --server-side -f -\n}\n\n";

    let llmisvcconfig_create = "create_kserve_llmisvcconfig_manifests() {\n    get_kserve_llmisvcconfig_manifests | kubectl apply --server-side -f -\n}\n\n";

    format!(
        r#"# ============================================================================
# KServe Manifest Functions (EMBED_MANIFESTS MODE)
# ============================================================================

install_kserve_manifest() {{
    log_info "Installing KServe CRDs..."
    get_kserve_crd_manifest | kubectl apply --server-side -f -

    log_info "Installing KServe core components..."
    get_kserve_core_manifest | kubectl apply --server-side -f -

    log_success "KServe CRD and core components installed successfully!"
}}

uninstall_kserve_manifest() {{
    # Uninstall in reverse order of dependencies
    log_info "Uninstalling KServe LLMISvcConfig manifests..."
    if [ "${{LLMISVC:-false}}" = "true" ] && type get_kserve_llmisvcconfig_manifests &>/dev/null; then
        get_kserve_llmisvcconfig_manifests | kubectl delete -f - || true
    fi

    log_info "Uninstalling KServe runtime manifests..."
    if [ "${{INSTALL_RUNTIMES:-false}}" = "true" ] && type get_kserve_runtime_manifests &>/dev/null; then
        get_kserve_runtime_manifests | kubectl delete -f - || true
    fi

    log_info "Uninstalling KServe core components..."
    get_kserve_core_manifest | kubectl delete -f - || true

    log_info "Uninstalling KServe CRDs..."
    get_kserve_crd_manifest | kubectl delete -f - || true

    log_success "KServe manifests uninstalled successfully!"
}}

{runtime_getter}{llmisvcconfig_getter}{runtime_create}{llmisvcconfig_create}get_kserve_crd_manifest() {{
    cat <<'KSERVE_CRD_MANIFEST_EOF'
{crd}KSERVE_CRD_MANIFEST_EOF
}}

get_kserve_core_manifest() {{
    cat <<'KSERVE_CORE_MANIFEST_EOF'
{core}KSERVE_CORE_MANIFEST_EOF
}}

"#,
        crd = manifests.crd,
        core = manifests.core,
    )
}
