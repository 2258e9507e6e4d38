//! Pruning of stored search IDs.
//!
//! Each stored SID is checked with one status call, one at a time. A job
//! whose check fails for any reason other than authentication is dropped.
//! An authentication failure aborts the walk and leaves history untouched.

use tracing::{debug, info};

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;

/// Outcome of a history prune.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub kept: usize,
    pub removed: usize,
}

impl SplunkClient {
    /// Drop history entries whose job can no longer be queried.
    pub async fn prune_history(&mut self) -> Result<PruneReport> {
        let token = self.auth_token()?;
        let mut retained = Vec::with_capacity(self.state.history().len());
        let mut removed = 0;

        for record in self.state.history() {
            match endpoints::get_job_status_body(&self.http, &self.base_url, token, &record.search_id)
                .await
            {
                Ok(_) => retained.push(record.clone()),
                Err(e) if e.is_auth_error() => {
                    debug!(sid = %record.search_id, "Auth failure while pruning; history unchanged");
                    return Err(e);
                }
                Err(e) => {
                    debug!(sid = %record.search_id, error = %e, "Dropping search from history");
                    removed += 1;
                }
            }
        }

        let report = PruneReport {
            kept: retained.len(),
            removed,
        };
        self.state.replace_history(retained);
        info!(kept = report.kept, removed = report.removed, "Pruned search history");
        Ok(report)
    }
}
