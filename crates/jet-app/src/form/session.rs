use std::sync::{Arc, Mutex, PoisonError};

use jet_core::form::{
    render_missing_fields, render_progress, FormVariant, MissingFieldsView, NavigationError,
    ProgressView,
};
use jet_core::ports::ViewportPort;
use jet_core::registration::RegistrationToken;
use tracing::{info, info_span, Instrument};

use super::navigator::FormNavigator;
use super::store::FormDataStore;
use crate::usecases::{SubmitRegistration, SubmitRegistrationError};

/// One visitor's pass through the registration form.
pub struct FormSession {
    variant: FormVariant,
    store: FormDataStore,
    navigator: FormNavigator,
    missing_fields: Mutex<Option<Vec<String>>>,
    submit: Arc<SubmitRegistration>,
}

impl FormSession {
    pub fn new(
        variant: FormVariant,
        viewport: Arc<dyn ViewportPort>,
        submit: Arc<SubmitRegistration>,
    ) -> Result<Self, NavigationError> {
        Ok(Self {
            variant,
            store: FormDataStore::new(),
            navigator: FormNavigator::new(variant.total_steps(), viewport)?,
            missing_fields: Mutex::new(None),
            submit,
        })
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn store(&self) -> &FormDataStore {
        &self.store
    }

    pub fn navigator(&self) -> &FormNavigator {
        &self.navigator
    }

    pub fn progress_view(&self) -> ProgressView {
        let state = self.navigator.state();
        render_progress(
            state.current_step(),
            state.total_steps(),
            self.variant.layout(),
        )
    }

    /// Banner for the last rejected submission, if any.
    pub fn missing_fields_view(&self) -> Option<MissingFieldsView> {
        let guard = self
            .missing_fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(missing) => render_missing_fields(true, missing),
            None => None,
        }
    }

    pub fn dismiss_missing_fields(&self) {
        self.set_missing_fields(None);
    }

    /// Submit the current form data.
    ///
    /// On success the navigator moves to the success pseudo-step and the
    /// store is cleared. A validation failure keeps the data and shows the
    /// missing-fields banner.
    pub async fn submit(&self) -> Result<RegistrationToken, SubmitRegistrationError> {
        let span = info_span!("form_session.submit", variant = ?self.variant);
        async {
            let data = self.store.snapshot();
            match self.submit.execute(&data, self.variant).await {
                Ok(token) => {
                    self.set_missing_fields(None);
                    self.navigator.mark_submitted();
                    self.store.reset();
                    info!(%token, "form submitted");
                    Ok(token)
                }
                Err(SubmitRegistrationError::Validation(missing)) => {
                    self.set_missing_fields(Some(missing.clone()));
                    Err(SubmitRegistrationError::Validation(missing))
                }
                Err(err) => Err(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Start over from the first step with an empty form.
    pub fn restart(&self) {
        self.set_missing_fields(None);
        self.store.reset();
        self.navigator.reset();
    }

    fn set_missing_fields(&self, value: Option<Vec<String>>) {
        *self
            .missing_fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = value;
    }
}
