//! Use case for editing the signed-in admin's profile

use std::sync::Arc;

use jet_core::ports::AuthProviderPort;
use jet_core::profile::ProfileUpdateRequest;
use tracing::{info, info_span, Instrument};

use super::ProfileError;
use crate::usecases::action_result::{run_action, ActionResult};

/// Forward a partial profile edit to the auth provider.
///
/// ## Behavior / 行为
/// - Resolves the acting user from the current session
/// - Sends `full_name` / `phone` as one metadata update with only those keys
/// - Sends a changed email as a separate request, since the provider may
///   require re-verification for it
/// - Stops at the first failed step
pub struct UpdateProfile {
    auth: Arc<dyn AuthProviderPort>,
}

impl UpdateProfile {
    pub fn new(auth: Arc<dyn AuthProviderPort>) -> Self {
        Self { auth }
    }

    /// Execute the use case.
    ///
    /// Never fails: provider errors and panics come back as
    /// [`ActionResult::Failure`].
    pub async fn execute(&self, request: ProfileUpdateRequest) -> ActionResult {
        let span = info_span!("usecase.update_profile.execute");
        run_action("update_profile", self.apply(request))
            .instrument(span)
            .await
    }

    async fn apply(&self, request: ProfileUpdateRequest) -> Result<(), ProfileError> {
        let user = self
            .auth
            .get_current_user()
            .await?
            .ok_or(ProfileError::Authentication)?;

        let request = request.normalized()?;

        if let Some(patch) = request.metadata_patch() {
            self.auth.update_user_metadata(&patch).await?;
            info!(
                user_id = %user.id,
                fields = ?patch.keys().collect::<Vec<_>>(),
                "profile metadata updated"
            );
        }

        if let Some(email) = request.email_change(user.email.as_deref()) {
            self.auth.update_user_email(email).await?;
            info!(user_id = %user.id, "email change requested");
        }

        Ok(())
    }
}
