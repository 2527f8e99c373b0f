use std::time::Instant;

use tracing::{error, info};

use crate::error::{ProviderError, Result};
use crate::fetch::fetch;
use crate::providers::{parse_and_group, ProviderGroups};

/// Fetches the list at `url` and groups it by provider.
pub fn collect_providers(url: &str) -> Result<ProviderGroups> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "pipeline", "Starting STUN provider collection");

    let body = fetch(url)?;
    let groups = parse_and_group(&body)?;

    info!(
        action = "complete",
        component = "pipeline",
        provider_count = groups.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Collection completed successfully"
    );
    Ok(groups)
}

/// Logs a pipeline failure and returns the text shown to the user.
pub fn describe_failure(e: &ProviderError) -> String {
    match e {
        ProviderError::Fetch { status } => {
            error!(action = "fail", component = "fetch", status = status, "Fetch rejected")
        }
        ProviderError::Network(source) => {
            error!(action = "fail", component = "network", error = %source, "Request failed")
        }
        ProviderError::Parse { line, entry, found } => {
            error!(action = "fail", component = "grouping", line_number = line, entry = %entry, parts = found, "Malformed server entry")
        }
    }
    e.to_string()
}

/// Runs the whole pipeline and returns the one line to print: the sorted
/// mapping, or the failure message. Failures never escape.
pub fn run(url: &str) -> String {
    match collect_providers(url) {
        Ok(groups) => groups.sorted_by_size().to_string(),
        Err(e) => describe_failure(&e),
    }
}
