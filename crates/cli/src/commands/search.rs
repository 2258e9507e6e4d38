//! `search`: submit a search job and record it in history.

use anyhow::Result;
use splunk_client::CreateJobOptions;
use tracing::info;

use crate::config_context::CommandContext;

pub async fn run(
    ctx: &CommandContext,
    query: &str,
    earliest: Option<String>,
    latest: Option<String>,
) -> Result<()> {
    let mut client = ctx.load_client()?;
    let options = CreateJobOptions {
        earliest_time: earliest,
        latest_time: latest,
    };

    let sid = client.submit_search(query, &options).await?;
    info!(sid = %sid, "Search submitted");

    ctx.state_file.save(client.state())?;
    println!("{}", search_id_line(&sid)?);
    Ok(())
}

/// `{"searchID": "<sid>"}` with the SID JSON-escaped.
fn search_id_line(sid: &str) -> Result<String> {
    Ok(format!("{{\"searchID\": {}}}", serde_json::to_string(sid)?))
}
