// Application state module
// Shared immutable state handed to every connection task

use super::types::Config;

/// Application state
///
/// URL lists are reloaded from disk or network on every request, so the only
/// state shared between connections is the startup configuration and one
/// outbound HTTP client (remote list fallback and raw proxying).
pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { config, client })
    }
}
