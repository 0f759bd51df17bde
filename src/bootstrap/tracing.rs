//! Tracing subscriber setup
//!
//! Structured stdout logging for the registration services. `RUST_LOG`
//! overrides the defaults below.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives.
///
/// Debug for our crates in development, info otherwise. The HTTP stack stays
/// at info so request bodies are never dumped.
pub fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("jet_core={level}"),
        format!("jet_app={level}"),
        format!("jet_infra={level}"),
        "hyper=info".to_string(),
        "hyper_util=info".to_string(),
        "reqwest=info".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Register the global subscriber.
///
/// ## Behavior / 行为
/// - `RUST_LOG` wins when set and parseable
/// - Otherwise [`build_filter_directives`] for the current build profile
/// - Fails if a subscriber is already installed; [`crate::start`] checks first
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(cfg!(not(test)));

    registry().with(env_filter).with(stdout_layer).try_init()?;
    Ok(())
}
