use ctx_config::CtxConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CtxConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CtxConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.database.is_configured() && has_env_prefix(&env_keys, "CTXGEN_DATABASE") {
        warnings.push(
            "Database config appears default while CTXGEN_DATABASE* env vars exist. Use double underscores (example: CTXGEN_DATABASE__DATABASE)."
                .to_string(),
        );
    }

    if has_env_prefix(&env_keys, "CTXGEN_OUTPUT_") && !has_env_prefix(&env_keys, "CTXGEN_OUTPUT__")
    {
        warnings.push(
            "CTXGEN_OUTPUT_* env vars are ignored. Use double underscores (example: CTXGEN_OUTPUT__BUNDLE_FILE)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
