//! Jauhr E Teg application layer
//!
//! Per-session form orchestration and the use cases behind the admin area.
//! Everything here talks to the outside world through `jet_core::ports`.

pub mod form;
pub mod usecases;

pub use form::{FormDataStore, FormNavigator, FormSession};
pub use usecases::{
    ActionResult, FilterAdminNotifications, GetAdminDisplayName, SubmitRegistration,
    SubmitRegistrationError, UpdatePassword, UpdateProfile,
};
