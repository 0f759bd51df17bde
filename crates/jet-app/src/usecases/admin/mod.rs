//! Admin-area use cases built on the shared name resolver.

mod filter_notifications;
mod get_admin_display_name;

pub use filter_notifications::FilterAdminNotifications;
pub use get_admin_display_name::GetAdminDisplayName;

use jet_core::admin::AuthUser;
use jet_core::ports::AuthProviderPort;
use tracing::warn;

/// Session user, or `None` when the session is missing or unreadable.
///
/// Display paths degrade to the default admin name instead of failing.
async fn current_admin(auth: &dyn AuthProviderPort) -> Option<AuthUser> {
    match auth.get_current_user().await {
        Ok(user) => user,
        Err(err) => {
            warn!(error = %err, "could not resolve admin session");
            None
        }
    }
}
