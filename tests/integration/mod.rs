//! Integration tests module for the management client
//!
//! Every test runs the real reqwest transport against a local `mockito`
//! server standing in for the management plugin.

pub mod end_to_end_test;
pub mod transport_test;
pub mod validation_test;

use rabbitmq_management::{Client, ClientConfig};
use std::sync::Once;

static INIT: Once = Once::new();

/// Basic credentials for guest:guest.
pub const GUEST_AUTH: &str = "Basic Z3Vlc3Q6Z3Vlc3Q=";

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        log::set_max_level(log::LevelFilter::Off);
    });
}

/// A client pointed at the mock server with default credentials.
pub fn client_for(server: &mockito::ServerGuard) -> Client {
    init_test_env();
    let config = ClientConfig::default()
        .with_base_url(server.url())
        .with_timeout(5000);
    Client::new(config).expect("valid test configuration")
}
