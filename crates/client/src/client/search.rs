//! Search-related API methods for [`SplunkClient`].
//!
//! # What this module handles:
//! - Submitting searches (time-range guard, history bookkeeping)
//! - Resolving job references against history
//! - Job status and results, parsed or raw
//!
//! # What this module does NOT handle:
//! - Low-level search endpoint HTTP calls (in [`crate::endpoints::search`])

use tracing::debug;

use crate::client::SplunkClient;
use crate::endpoints::{self, CreateJobOptions};
use crate::error::Result;
use crate::models::{JobStatusSnapshot, ResultRecord};
use crate::query::validate_time_range;

impl SplunkClient {
    /// Submit a search and append it to history, returning the new SID.
    ///
    /// The query must carry a time range, either inline (`earliest=...`) or
    /// through `options.earliest_time`. Nothing is sent otherwise.
    pub async fn submit_search(&mut self, query: &str, options: &CreateJobOptions) -> Result<String> {
        validate_time_range(query, options.earliest())?;
        let token = self.auth_token()?;

        let sid = endpoints::create_job(&self.http, &self.base_url, token, query, options).await?;
        let index = self.state.record_search(sid.clone(), query);
        debug!(sid = %sid, index, "Recorded search in history");
        Ok(sid)
    }

    /// Resolve a history index or literal SID to a SID.
    pub fn resolve_reference<'a>(&'a self, reference: &'a str) -> &'a str {
        self.state.resolve_reference(reference)
    }

    /// Fetch and parse job status.
    pub async fn job_status(&self, sid: &str) -> Result<JobStatusSnapshot> {
        let token = self.auth_token()?;
        endpoints::get_job_status(&self.http, &self.base_url, token, sid).await
    }

    /// Fetch the job status body unparsed.
    pub async fn job_status_raw(&self, sid: &str) -> Result<String> {
        let token = self.auth_token()?;
        endpoints::get_job_status_body(&self.http, &self.base_url, token, sid).await
    }

    /// Fetch results and turn each row into a printable record.
    ///
    /// `count == 0` fetches all results.
    pub async fn results(&self, sid: &str, count: u64) -> Result<Vec<ResultRecord>> {
        let token = self.auth_token()?;
        let response = endpoints::get_results(&self.http, &self.base_url, token, sid, count).await?;
        Ok(response.into_records())
    }

    /// Fetch the results body unparsed.
    pub async fn results_raw(&self, sid: &str, count: u64) -> Result<String> {
        let token = self.auth_token()?;
        endpoints::get_results_body(&self.http, &self.base_url, token, sid, count).await
    }
}
