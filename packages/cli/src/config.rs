// ABOUTME: Runtime configuration of the taskboard binary
// ABOUTME: Reads auth mode and demo seeding from the environment with defaults

use std::env;
use std::str::ParseBoolError;

use taskboard_auth::AuthMode;
use taskboard_config::constants::{
    DEFAULT_AUTH_MODE, DEFAULT_SEED_DEMO, TASKBOARD_AUTH_MODE, TASKBOARD_SEED_DEMO,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid auth mode: {0} (expected 'open' or 'registered')")]
    InvalidAuthMode(String),
    #[error("Invalid boolean for {name}: {source}")]
    InvalidBool {
        name: &'static str,
        source: ParseBoolError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub auth_mode: AuthMode,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source; unset variables take their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode_str =
            lookup(TASKBOARD_AUTH_MODE).unwrap_or_else(|| DEFAULT_AUTH_MODE.to_string());
        let auth_mode = mode_str
            .trim()
            .parse::<AuthMode>()
            .map_err(|_| ConfigError::InvalidAuthMode(mode_str.clone()))?;

        let seed_demo = lookup(TASKBOARD_SEED_DEMO)
            .unwrap_or_else(|| DEFAULT_SEED_DEMO.to_string())
            .trim()
            .to_lowercase()
            .parse::<bool>()
            .map_err(|source| ConfigError::InvalidBool {
                name: TASKBOARD_SEED_DEMO,
                source,
            })?;

        Ok(Config {
            auth_mode,
            seed_demo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(
            config,
            Config {
                auth_mode: AuthMode::Registered,
                seed_demo: true,
            }
        );
    }

    #[rstest]
    #[case("open", AuthMode::Open)]
    #[case("OPEN", AuthMode::Open)]
    #[case(" registered ", AuthMode::Registered)]
    fn test_auth_mode_values(#[case] raw: &str, #[case] expected: AuthMode) {
        let config = Config::from_lookup(lookup_from(&[(TASKBOARD_AUTH_MODE, raw)])).unwrap();
        assert_eq!(config.auth_mode, expected);
    }

    #[test]
    fn test_invalid_auth_mode() {
        let result = Config::from_lookup(lookup_from(&[(TASKBOARD_AUTH_MODE, "ldap")]));
        assert_eq!(result, Err(ConfigError::InvalidAuthMode("ldap".into())));
    }

    #[rstest]
    #[case("false", false)]
    #[case("TRUE", true)]
    fn test_seed_demo_values(#[case] raw: &str, #[case] expected: bool) {
        let config = Config::from_lookup(lookup_from(&[(TASKBOARD_SEED_DEMO, raw)])).unwrap();
        assert_eq!(config.seed_demo, expected);
    }

    #[test]
    fn test_invalid_seed_demo() {
        let result = Config::from_lookup(lookup_from(&[(TASKBOARD_SEED_DEMO, "sometimes")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBool {
                name: TASKBOARD_SEED_DEMO,
                ..
            })
        ));
    }
}
