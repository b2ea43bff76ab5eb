//! Device classification module
//!
//! Mobile sniffing from the User-Agent header decides which URL list a
//! request draws from.

use crate::config::SourcesConfig;

/// Tokens that mark a client as mobile, matched case-insensitively
const MOBILE_TOKENS: [&str; 6] = [
    "mobile",
    "android",
    "iphone",
    "ipod",
    "ipad",
    "windows phone",
];

/// Check whether a User-Agent string belongs to a mobile device
pub fn is_mobile(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_TOKENS.iter().any(|token| ua.contains(token))
}

/// Pick the list file name for a request's User-Agent
pub fn list_for<'a>(user_agent: &str, sources: &'a SourcesConfig) -> &'a str {
    if is_mobile(user_agent) {
        &sources.mobile_list
    } else {
        &sources.desktop_list
    }
}
