use std::sync::Arc;

use jet_core::ports::AuthProviderPort;
use jet_core::SecretString;
use tracing::{info, info_span, Instrument};

use super::ProfileError;
use crate::usecases::action_result::{run_action, ActionResult};

/// Change the signed-in admin's password.
///
/// Password rules are enforced by the provider; its rejection message is
/// returned as-is.
pub struct UpdatePassword {
    auth: Arc<dyn AuthProviderPort>,
}

impl UpdatePassword {
    pub fn new(auth: Arc<dyn AuthProviderPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, new_password: SecretString) -> ActionResult {
        let span = info_span!("usecase.update_password.execute");
        run_action("update_password", self.apply(new_password))
            .instrument(span)
            .await
    }

    async fn apply(&self, new_password: SecretString) -> Result<(), ProfileError> {
        let user = self
            .auth
            .get_current_user()
            .await?
            .ok_or(ProfileError::Authentication)?;

        self.auth.update_user_password(&new_password).await?;
        info!(user_id = %user.id, "password updated");
        Ok(())
    }
}
