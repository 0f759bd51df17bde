use jet_registration::bootstrap::config::{PROVIDER_ANON_KEY_VAR, PROVIDER_URL_VAR};
use jet_registration::bootstrap::tracing::init_tracing_subscriber;
use jet_registration::start;
use serial_test::serial;
use tracing::Level;

#[test]
#[serial]
fn test_start_installs_env_filter_subscriber_once() {
    std::env::remove_var("RUST_LOG");
    std::env::set_var(PROVIDER_URL_VAR, "https://jet.example.co");
    std::env::set_var(PROVIDER_ANON_KEY_VAR, "anon-key");

    let services = start().expect("first start should install tracing");
    assert_eq!(services.provider_url(), "https://jet.example.co");
    assert!(tracing::dispatcher::has_been_set());

    // Default directives: our crates follow the build profile, the HTTP stack stays at info.
    assert_eq!(
        tracing::enabled!(target: "jet_app::usecases", Level::DEBUG),
        cfg!(debug_assertions)
    );
    assert!(tracing::enabled!(target: "jet_infra::provider", Level::INFO));
    assert!(!tracing::enabled!(target: "reqwest::connect", Level::DEBUG));

    // A second start reuses the installed subscriber.
    start().expect("start with a subscriber already installed");
    assert!(init_tracing_subscriber().is_err());

    std::env::remove_var(PROVIDER_URL_VAR);
    std::env::remove_var(PROVIDER_ANON_KEY_VAR);
}

#[test]
#[serial]
fn test_start_fails_without_provider_url() {
    std::env::remove_var("RUST_LOG");
    std::env::remove_var(PROVIDER_URL_VAR);
    std::env::set_var(PROVIDER_ANON_KEY_VAR, "anon-key");

    let err = start().err().expect("missing url must be fatal");

    std::env::remove_var(PROVIDER_ANON_KEY_VAR);
    assert!(format!("{err:#}").contains(PROVIDER_URL_VAR), "{err:#}");
}
