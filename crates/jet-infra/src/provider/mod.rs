//! REST adapters for the hosted auth/database provider.

mod auth;
mod client;
mod registrations;

pub use auth::HttpAuthProvider;
pub use client::{ProviderClient, ProviderClientError};
pub use registrations::HttpRegistrationStore;
