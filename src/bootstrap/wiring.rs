//! Dependency wiring
//!
//! The only place that knows about `jet-app` and `jet-infra` at the same
//! time. Assembly only: no decisions about what a session may do.

use std::sync::Arc;

use jet_app::usecases::{
    FilterAdminNotifications, GetAdminDisplayName, SubmitRegistration, UpdatePassword,
    UpdateProfile,
};
use jet_app::FormSession;
use jet_core::form::{FormVariant, NavigationError};
use jet_core::ports::{AuthProviderPort, ViewportPort};
use jet_core::{ProviderConfig, SecretString};
use jet_infra::{
    HttpAuthProvider, HttpRegistrationStore, ProviderClient, ProviderClientError, SystemClock,
};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(#[from] ProviderClientError),
}

/// Process-wide services. Per-visitor and per-admin state is created from
/// here on demand and never shared.
pub struct RegistrationServices {
    client: ProviderClient,
    submit: Arc<SubmitRegistration>,
}

/// Admin actions bound to one admin session.
pub struct AdminActions {
    pub update_profile: UpdateProfile,
    pub update_password: UpdatePassword,
    pub display_name: GetAdminDisplayName,
    pub notifications: FilterAdminNotifications,
}

impl RegistrationServices {
    pub fn new(config: ProviderConfig) -> WiringResult<Self> {
        let client = ProviderClient::new(config)?;
        let store = Arc::new(HttpRegistrationStore::new(client.clone()));
        let submit = Arc::new(SubmitRegistration::new(store, Arc::new(SystemClock)));
        Ok(Self { client, submit })
    }

    pub fn provider_url(&self) -> &str {
        &self.client.config().url
    }

    /// Fresh form session for one visitor.
    pub fn form_session(
        &self,
        variant: FormVariant,
        viewport: Arc<dyn ViewportPort>,
    ) -> Result<FormSession, NavigationError> {
        FormSession::new(variant, viewport, Arc::clone(&self.submit))
    }

    /// Admin actions acting on the session identified by `access_token`.
    pub fn admin(&self, access_token: Option<SecretString>) -> AdminActions {
        let auth: Arc<dyn AuthProviderPort> = Arc::new(HttpAuthProvider::for_session(
            self.client.clone(),
            access_token,
        ));
        AdminActions {
            update_profile: UpdateProfile::new(Arc::clone(&auth)),
            update_password: UpdatePassword::new(Arc::clone(&auth)),
            display_name: GetAdminDisplayName::new(Arc::clone(&auth)),
            notifications: FilterAdminNotifications::new(auth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jet_infra::HeadlessViewport;

    fn services() -> RegistrationServices {
        RegistrationServices::new(ProviderConfig::new(
            "https://jet.example.co/",
            SecretString::from("anon-key"),
        ))
        .unwrap()
    }

    #[test]
    fn sessions_are_independent() {
        let services = services();
        let viewport = Arc::new(HeadlessViewport::new());

        let first = services
            .form_session(FormVariant::FiveStep, viewport.clone())
            .unwrap();
        let second = services
            .form_session(FormVariant::SixStep, viewport)
            .unwrap();

        first.navigator().next();
        assert_eq!(first.navigator().current_step(), 2);
        assert_eq!(second.navigator().current_step(), 1);
        assert_eq!(second.navigator().total_steps(), 6);
    }

    #[test]
    fn provider_url_is_normalized() {
        assert_eq!(services().provider_url(), "https://jet.example.co");
    }
}
