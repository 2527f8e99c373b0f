use std::time::Instant;

use reqwest::StatusCode;
use tracing::{info, warn};

use crate::error::{ProviderError, Result};

// ref: https://github.com/pradt2/always-online-stun
pub const SOURCE_URL: &str =
    "https://raw.githubusercontent.com/pradt2/always-online-stun/master/valid_hosts.txt";

/// Downloads the server list. Anything but `200 OK` is a [`ProviderError::Fetch`].
pub fn fetch(url: &str) -> Result<String> {
    let start_time = Instant::now();
    info!(action = "start", component = "fetch", url = url, "Fetching STUN server list");

    let response = reqwest::blocking::get(url)?;
    let status = response.status();

    if status != StatusCode::OK {
        warn!(action = "reject", component = "fetch", status = status.as_u16(), "Unexpected response status");
        return Err(ProviderError::Fetch {
            status: status.as_u16(),
        });
    }

    let body = response.text()?;

    info!(
        action = "complete",
        component = "fetch",
        bytes = body.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "STUN server list downloaded"
    );
    Ok(body)
}
