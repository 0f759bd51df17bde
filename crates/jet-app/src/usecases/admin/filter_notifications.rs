use std::sync::Arc;

use jet_core::admin::{filter_foreign_notifications, AdminNotification};
use jet_core::ports::AuthProviderPort;
use tracing::{debug, info_span, Instrument};

use super::current_admin;

/// Hide the current admin's own actions from the activity feed.
pub struct FilterAdminNotifications {
    auth: Arc<dyn AuthProviderPort>,
}

impl FilterAdminNotifications {
    pub fn new(auth: Arc<dyn AuthProviderPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, notifications: Vec<AdminNotification>) -> Vec<AdminNotification> {
        let span = info_span!("usecase.filter_admin_notifications.execute");
        async {
            let total = notifications.len();
            let user = current_admin(self.auth.as_ref()).await;
            let visible = filter_foreign_notifications(user.as_ref(), notifications);
            debug!(total, visible = visible.len(), "admin notifications filtered");
            visible
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::FakeAuthProvider;
    use chrono::DateTime;
    use jet_core::admin::{AuthUser, UserMetadata};

    fn notification(id: &str, actor: &str) -> AdminNotification {
        AdminNotification {
            id: id.into(),
            actor_name: actor.into(),
            message: "updated fixture schedule".into(),
            created_at: DateTime::from_timestamp(1_735_689_600, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn feed_uses_the_same_name_as_the_header() {
        let user = AuthUser::new("u-1", Some("omar@jet.pk".to_string()))
            .with_metadata(UserMetadata::new().with("display_name", "Coach Omar"));
        let use_case = FilterAdminNotifications::new(Arc::new(FakeAuthProvider::signed_in(user)));

        let visible = use_case
            .execute(vec![
                notification("1", "Coach Omar"),
                notification("2", "Omar"),
                notification("3", "Jane Doe"),
            ])
            .await;

        let ids: Vec<_> = visible.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }
}
