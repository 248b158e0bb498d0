//! Configuration schema definitions.

use std::path::PathBuf;

/// Deployment environment, derived from `APP_ENV` (or its legacy alias
/// `NODE_ENV`).
///
/// Anything other than `production` (case-insensitive) counts as development
/// and enables the human-readable console log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse the `APP_ENV` value. Unrecognized values fall back to development.
    pub fn from_var(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Root configuration for the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP listener binds to (`PORT`).
    pub port: u16,

    /// Session cookie signing secret (`SECRET`).
    pub secret: String,

    /// Directory holding the session files (`SESSION_PATH`).
    pub session_path: PathBuf,

    /// Deployment environment (`APP_ENV`).
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            secret: "apps3cr3t".to_string(),
            session_path: PathBuf::from("./sessions"),
            environment: Environment::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.secret, "apps3cr3t");
        assert_eq!(config.session_path, PathBuf::from("./sessions"));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn environment_parsing_is_case_insensitive() {
        assert_eq!(Environment::from_var("production"), Environment::Production);
        assert_eq!(Environment::from_var("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::from_var("development"), Environment::Development);
        assert_eq!(Environment::from_var("staging"), Environment::Development);
    }
}
