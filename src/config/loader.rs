//! Configuration loading from the process environment.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::{AppConfig, Environment};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Load configuration from the process environment.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    load(|name| std::env::var(name).ok())
}

/// Load configuration through a variable-lookup function.
///
/// Unset variables fall back to defaults; a malformed `PORT` is a startup
/// failure, not a silent fallback.
pub fn load(vars: impl Fn(&str) -> Option<String>) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(port) = vars("PORT") {
        config.port = port
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value: port.clone(), source })?;
    }
    if let Some(secret) = vars("SECRET") {
        config.secret = secret;
    }
    if let Some(path) = vars("SESSION_PATH") {
        config.session_path = PathBuf::from(path);
    }
    // NODE_ENV is honored as a legacy alias so existing deployment tooling
    // keeps working; APP_ENV wins when both are set.
    if let Some(env) = vars("APP_ENV").or_else(|| vars("NODE_ENV")) {
        config.environment = Environment::from_var(&env);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = load(|_| None).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.secret, "apps3cr3t");
    }

    #[test]
    fn set_variables_override_defaults() {
        let config = load(vars_from(&[
            ("PORT", "9090"),
            ("SECRET", "hunter2"),
            ("SESSION_PATH", "/tmp/sess"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.secret, "hunter2");
        assert_eq!(config.session_path, PathBuf::from("/tmp/sess"));
        assert!(config.environment.is_production());
    }

    #[test]
    fn node_env_is_a_legacy_alias() {
        let config = load(vars_from(&[("NODE_ENV", "production")])).unwrap();
        assert!(config.environment.is_production());
    }

    #[test]
    fn app_env_wins_over_node_env() {
        let config = load(vars_from(&[
            ("APP_ENV", "development"),
            ("NODE_ENV", "production"),
        ]))
        .unwrap();
        assert!(!config.environment.is_production());
    }

    #[test]
    fn malformed_port_is_an_error() {
        let err = load(vars_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}
