//! Port interfaces for the application layer
//!
//! Ports define the contract between use cases and the infrastructure that
//! talks to the hosted provider or to the front end. Core code only sees
//! these traits.

mod auth;
mod clock;
mod errors;
mod registration_store;
mod viewport;

pub use auth::AuthProviderPort;
pub use clock::ClockPort;
pub use errors::ProviderError;
pub use registration_store::RegistrationStorePort;
pub use viewport::ViewportPort;
