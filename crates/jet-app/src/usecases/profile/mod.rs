//! Admin profile actions forwarded to the auth provider.

mod update_password;
mod update_profile;

pub use update_password::UpdatePassword;
pub use update_profile::UpdateProfile;

use jet_core::ports::ProviderError;
use jet_core::profile::ProfileValidationError;
use tracing::error;

/// Failures of profile actions. The `Display` text is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("User not found")]
    Authentication,
    #[error("{0}")]
    Upstream(String),
    #[error(transparent)]
    Invalid(#[from] ProfileValidationError),
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl From<ProviderError> for ProfileError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected { message, .. } => ProfileError::Upstream(message),
            ProviderError::Unavailable(detail) => {
                error!(%detail, "auth provider unavailable");
                ProfileError::Unexpected
            }
        }
    }
}
