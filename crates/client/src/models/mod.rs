//! Data models for Splunk API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod auth;
pub mod common;
pub mod jobs;
pub mod results;

pub use auth::LoginResponse;
pub use common::{Entry, MessageType, SplunkMessage, SplunkMessages, SplunkResponse};
pub use jobs::{CreateJobResponse, DisplayStatus, JobStatus, JobStatusSnapshot};
pub use results::{RawResult, ResultRecord, ResultsResponse};
