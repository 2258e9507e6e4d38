//! REST API endpoint implementations.
//!
//! Free functions taking a `reqwest::Client`, base URL and token. They own
//! URL construction and response decoding; [`crate::client::SplunkClient`]
//! owns state.

mod auth;
pub mod request;
pub mod search;
pub mod url_encoding;

pub use auth::login;
pub use request::{send_authenticated, send_request};
pub use search::{
    CreateJobOptions, create_job, get_job_status, get_job_status_body, get_results,
    get_results_body,
};
pub use url_encoding::encode_path_segment;
