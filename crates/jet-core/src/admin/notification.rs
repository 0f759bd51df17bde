use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::name::resolve_admin_name;
use super::user::AuthUser;

/// An entry in the admin activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminNotification {
    pub id: String,
    /// Display name of the admin who performed the action.
    pub actor_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Drop notifications produced by the viewing admin.
///
/// Actor names were recorded with [`resolve_admin_name`], so the same
/// derivation is used here for the comparison.
pub fn filter_foreign_notifications(
    viewer: Option<&AuthUser>,
    notifications: Vec<AdminNotification>,
) -> Vec<AdminNotification> {
    let own_name = resolve_admin_name(viewer);
    notifications
        .into_iter()
        .filter(|n| n.actor_name != own_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, actor: &str) -> AdminNotification {
        AdminNotification {
            id: id.to_string(),
            actor_name: actor.to_string(),
            message: "approved registration jet-2025-AB12C".to_string(),
            created_at: DateTime::from_timestamp(1_735_689_600, 0).unwrap(),
        }
    }

    #[test]
    fn own_notifications_are_hidden() {
        let viewer = AuthUser::new("u1", Some("bob@example.com".to_string()));
        let feed = vec![notification("1", "Bob"), notification("2", "Jane Doe")];

        let visible = filter_foreign_notifications(Some(&viewer), feed);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn anonymous_viewer_filters_default_admin_name() {
        let feed = vec![notification("1", "Admin"), notification("2", "Bob")];

        let visible = filter_foreign_notifications(None, feed);

        assert_eq!(visible.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), ["2"]);
    }
}
