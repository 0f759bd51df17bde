use async_trait::async_trait;

use crate::admin::{AuthUser, UserMetadata};
use crate::ports::ProviderError;
use crate::security::SecretString;

/// Session-scoped access to the hosted auth provider.
///
/// An implementation is bound to one caller's session; every method acts on
/// that session's user.
#[async_trait]
pub trait AuthProviderPort: Send + Sync {
    /// Current session user, `None` when there is no valid session.
    async fn get_current_user(&self) -> Result<Option<AuthUser>, ProviderError>;

    /// Merge `metadata` into the user's metadata. Keys not present are kept.
    async fn update_user_metadata(&self, metadata: &UserMetadata) -> Result<(), ProviderError>;

    /// Request an email change (may trigger re-verification on the provider).
    async fn update_user_email(&self, new_email: &str) -> Result<(), ProviderError>;

    async fn update_user_password(&self, new_password: &SecretString) -> Result<(), ProviderError>;
}
