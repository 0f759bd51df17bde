//! Provider configuration loader
//!
//! Reads the provider endpoint and anon key from the process environment,
//! after loading a `.env` file when one is present. Both values are required;
//! there are no defaults.

use std::path::Path;

use jet_core::{ProviderConfig, SecretString};
use tracing::{debug, warn};

pub const PROVIDER_URL_VAR: &str = "JET_PROVIDER_URL";
pub const PROVIDER_ANON_KEY_VAR: &str = "JET_PROVIDER_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Load `.env` from the working directory (if any), then read the process
/// environment.
pub fn load_provider_config() -> Result<ProviderConfig, ConfigurationError> {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "ignoring unreadable .env"),
    }
    provider_config_from(|key| std::env::var(key).ok())
}

/// Same as [`load_provider_config`] with an explicit env file.
///
/// Variables already set in the process take precedence over the file.
pub fn load_provider_config_with_env_file(
    path: &Path,
) -> Result<ProviderConfig, ConfigurationError> {
    if let Err(err) = dotenvy::from_path(path) {
        warn!(path = %path.display(), error = %err, "could not load env file");
    }
    provider_config_from(|key| std::env::var(key).ok())
}

/// Build the provider configuration from an arbitrary variable lookup.
pub fn provider_config_from<F>(lookup: F) -> Result<ProviderConfig, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    let url = required(&lookup, PROVIDER_URL_VAR)?;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ConfigurationError::Invalid {
            key: PROVIDER_URL_VAR,
            reason: "expected an http(s) URL".to_string(),
        });
    }
    let anon_key = required(&lookup, PROVIDER_ANON_KEY_VAR)?;

    Ok(ProviderConfig::new(url, SecretString::new(anon_key)))
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigurationError::Missing(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_both_values() {
        let config = provider_config_from(lookup_from(&[
            (PROVIDER_URL_VAR, "https://jet.example.co/"),
            (PROVIDER_ANON_KEY_VAR, "anon-key"),
        ]))
        .unwrap();

        assert_eq!(config.url, "https://jet.example.co");
        assert_eq!(config.anon_key.expose(), "anon-key");
    }

    #[test]
    fn missing_url_is_reported_by_name() {
        let err = provider_config_from(lookup_from(&[(PROVIDER_ANON_KEY_VAR, "anon-key")]))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::Missing(PROVIDER_URL_VAR));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = provider_config_from(lookup_from(&[
            (PROVIDER_URL_VAR, "https://jet.example.co"),
            (PROVIDER_ANON_KEY_VAR, "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigurationError::Missing(PROVIDER_ANON_KEY_VAR));
    }

    #[test]
    fn url_without_scheme_is_invalid() {
        let err = provider_config_from(lookup_from(&[
            (PROVIDER_URL_VAR, "jet.example.co"),
            (PROVIDER_ANON_KEY_VAR, "anon-key"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::Invalid {
                key: PROVIDER_URL_VAR,
                ..
            }
        ));
    }

    #[test]
    #[serial]
    fn process_environment_is_used() {
        std::env::set_var(PROVIDER_URL_VAR, "https://env.example.co");
        std::env::set_var(PROVIDER_ANON_KEY_VAR, "env-key");

        let config = load_provider_config().unwrap();

        std::env::remove_var(PROVIDER_URL_VAR);
        std::env::remove_var(PROVIDER_ANON_KEY_VAR);
        assert_eq!(config.url, "https://env.example.co");
        assert_eq!(config.anon_key.expose(), "env-key");
    }

    #[test]
    #[serial]
    fn env_file_fills_unset_variables() {
        std::env::remove_var(PROVIDER_URL_VAR);
        std::env::set_var(PROVIDER_ANON_KEY_VAR, "from-process");

        let mut env_file = NamedTempFile::new().unwrap();
        writeln!(env_file, "{PROVIDER_URL_VAR}=https://file.example.co").unwrap();
        writeln!(env_file, "{PROVIDER_ANON_KEY_VAR}=from-file").unwrap();

        let config = load_provider_config_with_env_file(env_file.path()).unwrap();

        std::env::remove_var(PROVIDER_URL_VAR);
        std::env::remove_var(PROVIDER_ANON_KEY_VAR);
        assert_eq!(config.url, "https://file.example.co");
        assert_eq!(config.anon_key.expose(), "from-process");
    }
}
