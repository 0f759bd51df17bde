//! # jet-core
//!
//! Core domain models and business rules for the Jauhr E Teg team registration.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! form schema and state transitions, presentation view models, the admin
//! name resolver and the ports implemented by outer layers.

pub mod admin;
pub mod config;
pub mod form;
pub mod ids;
pub mod ports;
pub mod profile;
pub mod registration;
pub mod security;

// Re-export commonly used types at the crate root
pub use admin::{resolve_admin_name, AdminNotification, AuthUser, UserMetadata};
pub use config::ProviderConfig;
pub use form::{
    FieldValue, FileRef, FormData, FormField, FormPatch, FormVariant, NavigationAction,
    NavigationEvent, NavigationState, NavigationStateMachine,
};
pub use ids::UserId;
pub use profile::ProfileUpdateRequest;
pub use registration::{is_valid_registration_token, RegistrationRecord, RegistrationToken};
pub use security::SecretString;
