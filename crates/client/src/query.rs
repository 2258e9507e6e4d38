//! Submission guard for search queries.
//!
//! Every submitted search must carry a time-range qualifier. This is local
//! policy; Splunk itself accepts unbounded queries.

use crate::error::{ClientError, Result};

/// Returns true if the query text contains `earliest` (case-insensitive).
///
/// This is a substring check, so `earliest=`, `earliest_time=` and any other
/// occurrence such as a field value all count.
pub fn has_time_range(query: &str) -> bool {
    query.to_ascii_lowercase().contains("earliest")
}

/// Reject a query without a time range.
///
/// An explicit `earliest_time` job parameter counts as a time range.
pub fn validate_time_range(query: &str, earliest_time: Option<&str>) -> Result<()> {
    let has_param = earliest_time.is_some_and(|e| !e.trim().is_empty());
    if has_param || has_time_range(query) {
        return Ok(());
    }

    Err(ClientError::ValidationError(format!(
        "please specify a time range (e.g. earliest=-1h) in the search: {}",
        query
    )))
}
