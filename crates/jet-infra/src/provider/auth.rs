use async_trait::async_trait;
use jet_core::admin::{AuthUser, UserMetadata};
use jet_core::ports::{AuthProviderPort, ProviderError};
use jet_core::SecretString;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, info};

use super::client::{check_status, transport_error, ProviderClient};

const USER_PATH: &str = "auth/v1/user";

#[derive(Serialize)]
struct MetadataChange<'a> {
    data: &'a UserMetadata,
}

#[derive(Serialize)]
struct EmailChange<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct PasswordChange<'a> {
    password: &'a str,
}

/// [`AuthProviderPort`] over the provider's `/auth/v1/user` endpoint, bound
/// to the access token of one request's session.
pub struct HttpAuthProvider {
    client: ProviderClient,
    access_token: Option<SecretString>,
}

impl HttpAuthProvider {
    pub fn for_session(client: ProviderClient, access_token: Option<SecretString>) -> Self {
        Self {
            client,
            access_token: access_token.filter(|token| !token.is_empty()),
        }
    }

    fn session_token(&self) -> Result<&SecretString, ProviderError> {
        self.access_token.as_ref().ok_or(ProviderError::Rejected {
            status: Some(StatusCode::UNAUTHORIZED.as_u16()),
            message: "Auth session missing!".to_string(),
        })
    }

    async fn put_user<T: Serialize + Sync>(&self, body: &T) -> Result<(), ProviderError> {
        let token = self.session_token()?;
        let request = self
            .client
            .request(Method::PUT, USER_PATH, Some(token))
            .json(body);
        self.client.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthProviderPort for HttpAuthProvider {
    async fn get_current_user(&self) -> Result<Option<AuthUser>, ProviderError> {
        let Some(token) = self.access_token.as_ref() else {
            debug!("no access token, session is anonymous");
            return Ok(None);
        };

        let request = self.client.request(Method::GET, USER_PATH, Some(token));
        let response = request.send().await.map_err(transport_error)?;
        // Expired or malformed JWTs come back as 403 `bad_jwt`, unknown
        // sessions as 401 or 403 `session_not_found`.
        if matches!(response.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!(
                status = %response.status(),
                "access token rejected, treating session as signed out"
            );
            return Ok(None);
        }
        let response = check_status(response).await?;

        let user = response
            .json::<AuthUser>()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("unreadable user payload: {e}")))?;
        Ok(Some(user))
    }

    async fn update_user_metadata(&self, metadata: &UserMetadata) -> Result<(), ProviderError> {
        self.put_user(&MetadataChange { data: metadata }).await?;
        info!(keys = ?metadata.keys().collect::<Vec<_>>(), "user metadata updated");
        Ok(())
    }

    async fn update_user_email(&self, new_email: &str) -> Result<(), ProviderError> {
        self.put_user(&EmailChange { email: new_email }).await?;
        info!("email change requested");
        Ok(())
    }

    async fn update_user_password(&self, new_password: &SecretString) -> Result<(), ProviderError> {
        self.put_user(&PasswordChange {
            password: new_password.expose(),
        })
        .await?;
        info!("password updated");
        Ok(())
    }
}
