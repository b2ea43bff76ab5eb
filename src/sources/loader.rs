//! URL list loading module
//!
//! Lists are newline-delimited text files, one URL per line ("CSV" by name
//! only). A list is loaded fresh on every request: local search paths first,
//! then an HTTP fetch from the service's own host, then a fixed fallback
//! URL. The result always holds at least one entry.

use std::path::Path;

use tokio::fs;

use crate::config::SourcesConfig;
use crate::logger;

/// Split raw list text into entries, dropping blank lines
///
/// Lines are kept verbatim; only lines that are empty after trimming are
/// dropped.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Read the named list from the first readable search path
///
/// A readable but blank file still wins the search; the caller decides what
/// an empty list means.
pub async fn load_local(name: &str, search_paths: &[String]) -> Option<Vec<String>> {
    for dir in search_paths {
        let path = Path::new(dir).join(name);
        match fs::read_to_string(&path).await {
            Ok(text) => return Some(split_lines(&text)),
            // Missing or unreadable: try the next location
            Err(_) => continue,
        }
    }
    None
}

/// Fetch the named list over HTTP from the service's own host
///
/// Non-2xx responses count as failures.
pub async fn fetch_remote(
    client: &reqwest::Client,
    host: &str,
    name: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let url = format!("http://{host}/{name}");
    let text = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(split_lines(&text))
}

/// Load the named URL list, applying the full fallback chain
pub async fn load(
    client: &reqwest::Client,
    host: Option<&str>,
    name: &str,
    sources: &SourcesConfig,
) -> Vec<String> {
    if let Some(list) = load_local(name, &sources.search_paths).await {
        if !list.is_empty() {
            return list;
        }
    }

    if let Some(host) = host {
        match fetch_remote(client, host, name).await {
            Ok(list) if !list.is_empty() => return list,
            Ok(_) => logger::log_warning(&format!("Remote list '{name}' from {host} is empty")),
            Err(e) => logger::log_warning(&format!("Remote fetch of '{name}' failed: {e}")),
        }
    }

    vec![sources.fallback_url.clone()]
}
