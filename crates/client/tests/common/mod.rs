//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use splunk_client::testing::{load_fixture, state_for};

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_client::endpoints;
#[allow(unused_imports)]
pub use splunk_client::{ClientError, SplunkClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token stored in states built by [`client_for`].
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-session-key-12345678";

/// A client logged in against `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SplunkClient {
    SplunkClient::builder()
        .state(state_for(&server.uri(), TEST_TOKEN))
        .build()
        .expect("client builds")
}
