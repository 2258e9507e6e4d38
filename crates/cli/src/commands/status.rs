//! `status`: job status for one reference, or the search history.

use anyhow::Result;
use chrono::{Local, TimeZone, Utc};
use splunk_client::JobStatus;
use splunk_client::sid::sid_timestamp;
use splunk_config::SearchRecord;

use crate::config_context::CommandContext;

const UNKNOWN_DATE: &str = "UNKNOWN";

pub async fn run(ctx: &CommandContext, reference: Option<&str>, raw: bool) -> Result<()> {
    let client = ctx.load_client()?;

    let Some(reference) = reference else {
        for (index, record) in client.state().history().iter().enumerate() {
            println!("{}", history_line(index, record));
        }
        return Ok(());
    };

    let sid = client.resolve_reference(reference);
    if raw {
        println!("{}", client.job_status_raw(sid).await?);
        return Ok(());
    }

    let snapshot = client.job_status(sid).await?;
    let now = Utc::now().timestamp();
    for entry in &snapshot.entry {
        println!("{}", status_line(&entry.content, now));
    }
    Ok(())
}

/// `<progress> <results>/<preview> [ttl = <ttl>]\t<sid> <status>`
fn status_line(status: &JobStatus, now: i64) -> String {
    format!(
        "{:.2} {}/{} [ttl = {}]\t{} {}",
        status.done_progress,
        status.result_count,
        status.result_preview_count,
        status.corrected_ttl(now),
        status.sid,
        status.display_status()
    )
}

/// `<index>: <created> <sid>: <query>`
fn history_line(index: usize, record: &SearchRecord) -> String {
    format!(
        "{}: {} {}: {}",
        index,
        creation_date(&record.search_id),
        record.search_id,
        record.query
    )
}

fn creation_date(sid: &str) -> String {
    sid_timestamp(sid)
        .ok()
        .and_then(|ts| Local.timestamp_opt(ts, 0).single())
        .map(|dt| dt.format("%b %-d %Y %H:%M:%S").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}
