//! In-memory provider fakes shared by use case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use jet_core::admin::{AuthUser, UserMetadata};
use jet_core::ports::{AuthProviderPort, ProviderError};
use jet_core::SecretString;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthCall {
    Metadata(UserMetadata),
    Email(String),
    Password(String),
}

/// Provider fake that records write calls and can be told to fail them.
pub struct FakeAuthProvider {
    user: Option<AuthUser>,
    calls: Mutex<Vec<AuthCall>>,
    pub fail_metadata: Option<ProviderError>,
    pub fail_email: Option<ProviderError>,
    pub fail_password: Option<ProviderError>,
    pub fail_lookup: Option<ProviderError>,
    pub panic_on_write: bool,
}

impl FakeAuthProvider {
    pub fn signed_in(user: AuthUser) -> Self {
        Self::with_user(Some(user))
    }

    pub fn signed_out() -> Self {
        Self::with_user(None)
    }

    fn with_user(user: Option<AuthUser>) -> Self {
        Self {
            user,
            calls: Mutex::new(Vec::new()),
            fail_metadata: None,
            fail_email: None,
            fail_password: None,
            fail_lookup: None,
            panic_on_write: false,
        }
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: AuthCall) {
        if self.panic_on_write {
            panic!("provider client bug");
        }
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AuthProviderPort for FakeAuthProvider {
    async fn get_current_user(&self) -> Result<Option<AuthUser>, ProviderError> {
        match &self.fail_lookup {
            Some(err) => Err(err.clone()),
            None => Ok(self.user.clone()),
        }
    }

    async fn update_user_metadata(&self, metadata: &UserMetadata) -> Result<(), ProviderError> {
        self.record(AuthCall::Metadata(metadata.clone()));
        self.fail_metadata.clone().map_or(Ok(()), Err)
    }

    async fn update_user_email(&self, new_email: &str) -> Result<(), ProviderError> {
        self.record(AuthCall::Email(new_email.to_string()));
        self.fail_email.clone().map_or(Ok(()), Err)
    }

    async fn update_user_password(&self, new_password: &SecretString) -> Result<(), ProviderError> {
        self.record(AuthCall::Password(new_password.expose().to_string()));
        self.fail_password.clone().map_or(Ok(()), Err)
    }
}
