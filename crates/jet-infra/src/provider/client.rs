use std::sync::Arc;

use jet_core::ports::ProviderError;
use jet_core::{ProviderConfig, SecretString};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

/// Keys the provider uses for the human-readable part of an error body,
/// in lookup order.
const ERROR_MESSAGE_KEYS: [&str; 4] = ["msg", "message", "error_description", "error"];

#[derive(Debug, thiserror::Error)]
pub enum ProviderClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Shared HTTP client bound to one provider project.
///
/// Cheap to clone; session adapters each hold their own copy.
#[derive(Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    config: Arc<ProviderConfig>,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("jet-registration/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Request with the project key and a bearer token.
    ///
    /// Without a session token the anon key doubles as the bearer, which is
    /// what the provider expects for public requests.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&SecretString>,
    ) -> RequestBuilder {
        let anon_key = self.config.anon_key.expose();
        let bearer = access_token.map(SecretString::expose).unwrap_or(anon_key);
        debug!(%method, path, authenticated = access_token.is_some(), "provider request");
        self.http
            .request(method, self.config.endpoint(path))
            .header("apikey", anon_key)
            .bearer_auth(bearer)
    }

    /// Send `request` and turn non-2xx answers into [`ProviderError`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ProviderError> {
        let response = request.send().await.map_err(transport_error)?;
        check_status(response).await
    }
}

pub(crate) async fn check_status(response: Response) -> Result<Response, ProviderError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(error_from_response(response).await)
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> ProviderError {
    warn!(error = %err, "provider request failed");
    ProviderError::Unavailable(err.to_string())
}

async fn error_from_response(response: Response) -> ProviderError {
    let status = response.status();
    let message = match response.json::<Value>().await {
        Ok(body) => error_message(&body),
        Err(err) => {
            debug!(error = %err, "provider error body is not JSON");
            None
        }
    };

    match message {
        Some(message) => ProviderError::Rejected {
            status: Some(status.as_u16()),
            message,
        },
        None if status.is_server_error() => {
            ProviderError::Unavailable(format!("provider returned {status}"))
        }
        None => ProviderError::Rejected {
            status: Some(status.as_u16()),
            message: default_message(status),
        },
    }
}

/// First non-empty message field of a provider error body.
pub(crate) fn error_message(body: &Value) -> Option<String> {
    ERROR_MESSAGE_KEYS
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}
