pub mod action_result;
pub mod admin;
pub mod profile;
pub mod registration;

#[cfg(test)]
mod test_support;

pub use action_result::{ActionResult, GENERIC_ERROR_MESSAGE};
pub use admin::{FilterAdminNotifications, GetAdminDisplayName};
pub use profile::{ProfileError, UpdatePassword, UpdateProfile};
pub use registration::{SubmitRegistration, SubmitRegistrationError};
