use std::time::Instant;

use indexmap::IndexMap;
use tracing::info;

use crate::error::{ProviderError, Result};

/// One `host:port` line of the server list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StunEntry<'a> {
    pub host: &'a str,
    pub port: &'a str,
    pub raw: &'a str,
}

impl<'a> StunEntry<'a> {
    /// Domain the server is grouped under.
    pub fn provider(&self) -> &'a str {
        parent_domain(self.host)
    }
}

/// Splits a line into host and port. `line_num` is 1-based and only used for
/// error reporting.
pub fn parse_entry(line: &str, line_num: usize) -> Result<StunEntry<'_>> {
    let found = line.split(':').count();
    match line.split_once(':') {
        Some((host, port)) if found == 2 => Ok(StunEntry {
            host,
            port,
            raw: line,
        }),
        _ => Err(ProviderError::Parse {
            line: line_num,
            entry: line.to_string(),
            found,
        }),
    }
}

/// Drops the leftmost label: `stun.l.google.com` -> `l.google.com`.
/// A single-label host has an empty parent.
pub fn parent_domain(host: &str) -> &str {
    host.split_once('.').map(|(_, rest)| rest).unwrap_or("")
}

/// Server entries keyed by provider domain, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProviderGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl ProviderGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: &StunEntry<'_>) {
        self.groups
            .entry(entry.provider().to_string())
            .or_default()
            .push(entry.raw.to_string());
    }

    pub fn get(&self, provider: &str) -> Option<&[String]> {
        self.groups.get(provider).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Orders providers by how many servers they run, smallest first. Providers
    /// with the same count keep their first-seen order.
    pub fn sorted_by_size(self) -> SortedProviders {
        let mut groups: Vec<(String, Vec<String>)> = self.groups.into_iter().collect();
        groups.sort_by_key(|(_, servers)| servers.len());
        SortedProviders { groups }
    }
}

/// Provider groups in output order. Rendered by its `Display` impl.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortedProviders {
    pub(crate) groups: Vec<(String, Vec<String>)>,
}

impl SortedProviders {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups every non-blank line of `text` by provider. The first malformed line
/// aborts the whole grouping.
pub fn parse_and_group(text: &str) -> Result<ProviderGroups> {
    let start_time = Instant::now();
    info!(action = "start", component = "grouping", "Grouping STUN servers by provider");

    let mut groups = ProviderGroups::new();
    for (line_num, line) in text.trim().split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }
        let entry = parse_entry(line, line_num + 1)?;
        groups.insert(&entry);
    }

    info!(
        action = "complete",
        component = "grouping",
        provider_count = groups.len(),
        server_count = groups.entry_count(),
        duration_ms = start_time.elapsed().as_millis(),
        "Grouped STUN servers"
    );
    Ok(groups)
}
