//! Jauhr E Teg team registration
//!
//! Assembles the form engine, provider adapters and admin actions into a
//! ready-to-use service set. The domain lives in `jet-core`, use cases in
//! `jet-app` and the provider adapters in `jet-infra`.

pub mod bootstrap;

pub use bootstrap::{start, AdminActions, RegistrationServices};
pub use jet_app::{ActionResult, FormSession};
pub use jet_core::form::FormVariant;
