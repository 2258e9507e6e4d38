//! Search job models.
//!
//! # What this module handles:
//! - The job-creation response (assigned SID)
//! - Job status entries and the derived display status
//!
//! # What this module does NOT handle:
//! - HTTP transport (see [`crate::endpoints::search`])
//! - Result rows (see [`super::results`])

use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::{Entry, SplunkResponse};
use crate::sid::corrected_ttl;

/// Response body of `POST /services/search/jobs`.
///
/// Splunk can return either `{ "sid": "<sid>" }` or
/// `{ "entry": [ { "content": { "sid": "<sid>" } } ] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobResponse {
    sid: Option<String>,
    #[serde(default)]
    entry: Vec<Entry<CreatedJob>>,
}

#[derive(Debug, Clone, Deserialize)]
struct CreatedJob {
    sid: Option<String>,
}

impl CreateJobResponse {
    /// The assigned SID, from whichever shape the server used.
    pub fn into_sid(self) -> Option<String> {
        self.sid
            .or_else(|| self.entry.into_iter().next()?.content.sid)
            .filter(|sid| !sid.is_empty())
    }
}

/// Status of one search job as reported by `GET /services/search/jobs/{sid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(default)]
    pub sid: String,
    /// Completion fraction in `[0, 1]`.
    #[serde(
        rename = "doneProgress",
        default,
        deserialize_with = "crate::serde_helpers::f64_from_string_or_number"
    )]
    pub done_progress: f64,
    #[serde(
        rename = "resultCount",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub result_count: usize,
    #[serde(
        rename = "resultPreviewCount",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub result_preview_count: usize,
    /// Seconds until the job's results expire, as of the server's snapshot.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::i64_from_string_or_number"
    )]
    pub ttl: i64,
    #[serde(
        rename = "isDone",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_bool"
    )]
    pub is_done: bool,
}

/// Status shown to the user, derived from `isDone` and `doneProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Done,
    /// Progress is saturated but the done flag is not set.
    Unknown,
    Unfinished,
}

impl DisplayStatus {
    pub fn from_progress(is_done: bool, done_progress: f64) -> Self {
        if is_done {
            Self::Done
        } else if done_progress == 1.0 {
            Self::Unknown
        } else {
            Self::Unfinished
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Done => "done",
            Self::Unknown => "unknown",
            Self::Unfinished => "unfinished",
        };
        write!(f, "{}", s)
    }
}

impl JobStatus {
    pub fn display_status(&self) -> DisplayStatus {
        DisplayStatus::from_progress(self.is_done, self.done_progress)
    }

    /// TTL corrected for time elapsed since the job was created.
    pub fn corrected_ttl(&self, now: i64) -> i64 {
        corrected_ttl(&self.sid, self.ttl, now)
    }
}

/// Parsed job status response; one entry per job.
pub type JobStatusSnapshot = SplunkResponse<JobStatus>;
