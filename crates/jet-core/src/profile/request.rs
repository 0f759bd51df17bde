use serde::{Deserialize, Serialize};

use crate::admin::{meta_keys, UserMetadata};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("Invalid email address")]
    InvalidEmail,
}

/// Partial profile edit submitted from the admin settings page.
///
/// `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ProfileUpdateRequest {
    /// Trim every field and turn blank ones into `None`, then check the email.
    ///
    /// Blank input must never overwrite a stored value.
    pub fn normalized(self) -> Result<Self, ProfileValidationError> {
        let normalized = Self {
            full_name: non_blank(self.full_name),
            phone: non_blank(self.phone),
            email: non_blank(self.email),
        };

        if let Some(email) = &normalized.email {
            let mut parts = email.splitn(2, '@');
            let local = parts.next().unwrap_or_default();
            let domain = parts.next().unwrap_or_default();
            if local.is_empty() || domain.is_empty() || domain.contains('@') {
                return Err(ProfileValidationError::InvalidEmail);
            }
        }

        Ok(normalized)
    }

    /// Metadata update carrying only the provided keys, or `None` if there
    /// is nothing to send.
    pub fn metadata_patch(&self) -> Option<UserMetadata> {
        if self.full_name.is_none() && self.phone.is_none() {
            return None;
        }
        let mut patch = UserMetadata::new();
        if let Some(full_name) = &self.full_name {
            patch.insert(meta_keys::FULL_NAME, full_name.as_str());
        }
        if let Some(phone) = &self.phone {
            patch.insert(meta_keys::PHONE, phone.as_str());
        }
        Some(patch)
    }

    /// New email to request, if any and different from `current`.
    pub fn email_change(&self, current: Option<&str>) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|email| Some(*email) != current)
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
