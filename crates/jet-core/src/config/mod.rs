//! Provider connection settings.
//!
//! Pure data: loading from the environment and deciding what is fatal lives
//! in the bootstrap layer.

use crate::security::SecretString;

/// Endpoint and public API key of the hosted auth/database provider.
#[derive(Debug)]
pub struct ProviderConfig {
    /// Base URL, e.g. `https://project.example.co`, without trailing slash.
    pub url: String,
    pub anon_key: SecretString,
}

impl ProviderConfig {
    pub fn new(url: impl Into<String>, anon_key: SecretString) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}
