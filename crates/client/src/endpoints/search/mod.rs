//! Search job endpoints.
//!
//! Low-level HTTP calls for job creation, status, and results. Higher-level
//! behavior lives in [`crate::client::search`].

pub mod jobs;
pub mod types;

pub use jobs::{create_job, get_job_status, get_job_status_body, get_results, get_results_body};
pub use types::CreateJobOptions;
