//! Authenticated-admin domain: provider user model, display-name
//! derivation and the activity feed filter.

mod name;
mod notification;
mod user;

pub use name::{resolve_admin_name, DEFAULT_ADMIN_NAME};
pub use notification::{filter_foreign_notifications, AdminNotification};
pub use user::{meta_keys, AuthUser, UserMetadata};
