use super::user::{meta_keys, AuthUser};

pub const DEFAULT_ADMIN_NAME: &str = "Admin";

/// Display name for an authenticated admin.
///
/// Priority: metadata `full_name`, `display_name`, `name`, then the email
/// local part with its first character upper-cased, then `"Admin"`. Every
/// place that shows or compares admin names goes through this function.
pub fn resolve_admin_name(user: Option<&AuthUser>) -> String {
    let Some(user) = user else {
        return DEFAULT_ADMIN_NAME.to_string();
    };

    [meta_keys::FULL_NAME, meta_keys::DISPLAY_NAME, meta_keys::NAME]
        .iter()
        .filter_map(|key| user.metadata.text(key))
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| user.email.as_deref().and_then(email_display_name))
        .unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string())
}

fn email_display_name(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
