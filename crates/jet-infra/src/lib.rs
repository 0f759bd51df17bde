pub mod provider;
pub mod time;
pub mod viewport;

pub use provider::{HttpAuthProvider, HttpRegistrationStore, ProviderClient, ProviderClientError};
pub use time::SystemClock;
pub use viewport::HeadlessViewport;
