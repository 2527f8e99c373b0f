use clap::Parser;
use url::Url;

use crate::fetch::SOURCE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "stun-providers",
    about = "Fetch the public STUN server list and group the servers by provider domain",
    version,
    long_about = None
)]
pub struct Args {
    /// Override the list URL (for testing against a local server)
    #[arg(short, long, default_value = SOURCE_URL, value_parser = parse_source, hide_default_value = true)]
    pub source: Url,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_source(s: &str) -> Result<Url, String> {
    let url = Url::parse(s).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{other}', expected http or https")),
    }
}
