//! Search job operations.
//!
//! # What this module handles:
//! - Creating search jobs
//! - Getting job status (parsed or raw body)
//! - Retrieving search results (parsed or raw body)
//!
//! # What this module does NOT handle:
//! - Query validation and history bookkeeping (see [`crate::client::search`])

use reqwest::Client;
use tracing::debug;

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::{read_body, send_authenticated};
use crate::error::{ClientError, Result};
use crate::models::{CreateJobResponse, JobStatusSnapshot, ResultsResponse};

use super::types::CreateJobOptions;

fn authorization(auth_token: &str) -> String {
    format!("Splunk {}", auth_token)
}

/// Create a new search job, returning the assigned SID.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &str,
    options: &CreateJobOptions,
) -> Result<String> {
    debug!("Creating search job: {}", query);

    let url = format!("{}/services/search/jobs", base_url);
    let form = options.form_fields(query);
    for (key, value) in &form {
        debug!("  {}: {}", key, value);
    }

    let builder = client
        .post(&url)
        .header("Authorization", authorization(auth_token))
        .form(&form);
    let response = send_authenticated(builder, "/services/search/jobs", "POST").await?;
    let body = read_body(response).await?;

    let parsed: CreateJobResponse = serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job creation: {}", e)))?;
    let sid = parsed
        .into_sid()
        .ok_or_else(|| ClientError::InvalidResponse("Missing sid in response".to_string()))?;

    debug!("Created search job {}", sid);
    Ok(sid)
}

/// Fetch the job status body without parsing it.
pub async fn get_job_status_body(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
) -> Result<String> {
    debug!("Getting status for job: {}", sid);

    let url = format!(
        "{}/services/search/jobs/{}",
        base_url,
        encode_path_segment(sid)
    );
    let builder = client
        .get(&url)
        .header("Authorization", authorization(auth_token))
        .query(&[("output_mode", "json")]);
    let response = send_authenticated(builder, "/services/search/jobs/{sid}", "GET").await?;
    read_body(response).await
}

/// Get the status of a search job.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
) -> Result<JobStatusSnapshot> {
    let body = get_job_status_body(client, base_url, auth_token, sid).await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job status: {}", e)))
}

/// Fetch the results body without parsing it. `count == 0` means all results.
pub async fn get_results_body(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
    count: u64,
) -> Result<String> {
    debug!("Getting results for job: {} (count={})", sid, count);

    let url = format!(
        "{}/services/search/jobs/{}/results",
        base_url,
        encode_path_segment(sid)
    );
    let count = count.to_string();
    let builder = client
        .get(&url)
        .header("Authorization", authorization(auth_token))
        .query(&[("output_mode", "json"), ("count", count.as_str())]);
    let response =
        send_authenticated(builder, "/services/search/jobs/{sid}/results", "GET").await?;
    read_body(response).await
}

/// Get results from a search job.
pub async fn get_results(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
    count: u64,
) -> Result<ResultsResponse> {
    let body = get_results_body(client, base_url, auth_token, sid, count).await?;
    ResultsResponse::parse(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse results: {}", e)))
}
