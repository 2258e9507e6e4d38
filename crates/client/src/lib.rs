//! Splunk REST search API client.
//!
//! Authenticates against a Splunk management endpoint, submits search jobs,
//! reads their status and results, and prunes stale job IDs from the
//! persisted search history.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod query;
mod serde_helpers;
pub mod sid;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::builder::SplunkClientBuilder;
pub use client::{PruneReport, SplunkClient};
pub use endpoints::CreateJobOptions;
pub use error::{ClientError, Result};
pub use models::{
    DisplayStatus, JobStatus, JobStatusSnapshot, ResultRecord, SplunkMessages, SplunkResponse,
};
