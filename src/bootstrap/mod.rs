pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_provider_config, ConfigurationError};
pub use wiring::{AdminActions, RegistrationServices, WiringError};

use anyhow::Context;

/// Install logging, load provider settings from the environment and assemble
/// the services.
///
/// An embedding host may already own the global subscriber; it is kept.
/// Missing settings are fatal: nothing that talks to the provider is built.
pub fn start() -> anyhow::Result<RegistrationServices> {
    if !::tracing::dispatcher::has_been_set() {
        self::tracing::init_tracing_subscriber().context("failed to initialize tracing")?;
    }
    let config = load_provider_config().context("provider configuration is incomplete")?;
    let services =
        RegistrationServices::new(config).context("failed to assemble registration services")?;
    ::tracing::info!(provider = %services.provider_url(), "registration services ready");
    Ok(services)
}
