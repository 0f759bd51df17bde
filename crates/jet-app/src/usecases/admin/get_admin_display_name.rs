use std::sync::Arc;

use jet_core::admin::resolve_admin_name;
use jet_core::ports::AuthProviderPort;
use tracing::{debug, info_span, Instrument};

use super::current_admin;

/// Name shown in the admin header for the current session.
pub struct GetAdminDisplayName {
    auth: Arc<dyn AuthProviderPort>,
}

impl GetAdminDisplayName {
    pub fn new(auth: Arc<dyn AuthProviderPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self) -> String {
        let span = info_span!("usecase.get_admin_display_name.execute");
        async {
            let user = current_admin(self.auth.as_ref()).await;
            let name = resolve_admin_name(user.as_ref());
            debug!(%name, "admin display name resolved");
            name
        }
        .instrument(span)
        .await
    }
}
