//! HTTP cache control module
//!
//! Cache policies attached to selection responses. A pinned selection (an
//! in-range `id`) is cacheable for a day; a random selection must not be
//! cached.

/// Max-age for responses pinned to an explicit list index
pub const ONE_DAY_SECS: u32 = 86_400;

/// Cache control policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Public cache with specified max-age (seconds)
    Public(u32),
    /// No cache
    NoCache,
}

impl CachePolicy {
    /// Convert to Cache-Control header value
    pub fn to_header_value(self) -> String {
        match self {
            Self::Public(max_age) => format!("public, max-age={max_age}"),
            Self::NoCache => "no-cache".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_policy() {
        assert_eq!(
            CachePolicy::Public(ONE_DAY_SECS).to_header_value(),
            "public, max-age=86400"
        );
        assert_eq!(
            CachePolicy::Public(3600).to_header_value(),
            "public, max-age=3600"
        );
    }

    #[test]
    fn test_no_cache_policy() {
        assert_eq!(CachePolicy::NoCache.to_header_value(), "no-cache");
    }
}
