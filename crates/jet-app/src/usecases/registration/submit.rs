//! Use case for submitting a completed registration form

use std::sync::Arc;

use jet_core::form::{missing_required_fields, FormData, FormVariant};
use jet_core::ports::{ClockPort, ProviderError, RegistrationStorePort};
use jet_core::registration::{EntropySource, RegistrationRecord, RegistrationToken};
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum SubmitRegistrationError {
    /// Labels of the required fields left empty, in page order.
    #[error("missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("{0}")]
    Upstream(String),
    #[error("registration failed: {0}")]
    Unexpected(String),
}

impl From<ProviderError> for SubmitRegistrationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected { message, .. } => SubmitRegistrationError::Upstream(message),
            ProviderError::Unavailable(detail) => SubmitRegistrationError::Unexpected(detail),
        }
    }
}

/// Use case for submitting a completed registration form.
///
/// ## Behavior / 行为
/// - Checks every required field of the variant before touching the provider
/// - Generates a `jet-<year>-XXXXX` token, falling back to a non-secure
///   source with a warning when OS entropy is unavailable
/// - Inserts the record and returns the token on success
///
/// ## Errors / 错误
/// Missing fields come back as one `Validation` list. Provider rejections
/// keep the provider's message; anything else is `Unexpected`.
pub struct SubmitRegistration {
    store: Arc<dyn RegistrationStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl SubmitRegistration {
    pub fn new(store: Arc<dyn RegistrationStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    pub async fn execute(
        &self,
        data: &FormData,
        variant: FormVariant,
    ) -> Result<RegistrationToken, SubmitRegistrationError> {
        let span = info_span!("usecase.submit_registration.execute", ?variant);

        async {
            let missing = missing_required_fields(data, variant);
            if !missing.is_empty() {
                info!(missing = missing.len(), "registration incomplete");
                return Err(SubmitRegistrationError::Validation(missing));
            }

            let submitted_at = self.clock.now();
            let (token, source) = RegistrationToken::generate(self.clock.current_year())
                .map_err(|e| SubmitRegistrationError::Unexpected(e.to_string()))?;
            if source == EntropySource::Fallback {
                warn!(%token, "registration token generated from non-secure source");
            }

            let record = RegistrationRecord {
                token: token.clone(),
                variant,
                fields: data.clone(),
                submitted_at,
            };
            self.store.insert_registration(&record).await?;

            info!(%token, "registration stored");
            Ok(token)
        }
        .instrument(span)
        .await
    }
}
