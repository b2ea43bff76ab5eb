//! Selection resolution module
//!
//! Maps the optional `id` query parameter and the loaded list length to a
//! concrete index plus the cache policy for the response.

use rand::Rng;

use crate::http::cache::{CachePolicy, ONE_DAY_SECS};

/// Resolved selection for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index into the loaded list
    pub index: usize,
    /// Cache policy for the response; `None` emits no Cache-Control header
    pub cache: Option<CachePolicy>,
}

/// Resolve the `id` parameter against a list of `len` entries
///
/// `len` must be at least 1; the loader's fallback chain guarantees that.
///
/// - digits and in range: pinned selection, cacheable for a day
/// - digits but out of range (or overflowing): random index, no cache header
/// - absent or not all digits: random index, explicitly uncacheable
pub fn resolve(id_param: Option<&str>, len: usize) -> Selection {
    match id_param {
        Some(raw) if is_digits(raw) => match raw.parse::<usize>() {
            Ok(id) if id < len => Selection {
                index: id,
                cache: Some(CachePolicy::Public(ONE_DAY_SECS)),
            },
            _ => Selection {
                index: random_index(len),
                cache: None,
            },
        },
        _ => Selection {
            index: random_index(len),
            cache: Some(CachePolicy::NoCache),
        },
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Uniformly random valid index
fn random_index(len: usize) -> usize {
    rand::thread_rng().gen_range(0..len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_id_is_pinned_and_cacheable() {
        let selection = resolve(Some("2"), 5);
        assert_eq!(selection.index, 2);
        assert_eq!(selection.cache, Some(CachePolicy::Public(86_400)));
    }

    #[test]
    fn test_out_of_range_id_randomizes_without_cache_header() {
        for _ in 0..50 {
            let selection = resolve(Some("99"), 5);
            assert!(selection.index < 5);
            assert_eq!(selection.cache, None);
        }
    }

    #[test]
    fn test_overflowing_id_counts_as_out_of_range() {
        let selection = resolve(Some("99999999999999999999999999"), 5);
        assert!(selection.index < 5);
        assert_eq!(selection.cache, None);
    }

    #[test]
    fn test_missing_id_is_uncacheable() {
        for _ in 0..50 {
            let selection = resolve(None, 5);
            assert!(selection.index < 5);
            assert_eq!(selection.cache, Some(CachePolicy::NoCache));
        }
    }

    #[test]
    fn test_invalid_id_is_uncacheable() {
        for raw in ["abc", "-1", "1a", "", "1.5", "+2"] {
            let selection = resolve(Some(raw), 5);
            assert!(selection.index < 5);
            assert_eq!(selection.cache, Some(CachePolicy::NoCache));
        }
    }

    #[test]
    fn test_single_entry_list() {
        assert_eq!(resolve(None, 1).index, 0);
        assert_eq!(resolve(Some("0"), 1).index, 0);
    }

    #[test]
    fn test_random_selection_covers_the_list() {
        // Statistical smoke check: 1000 draws over 5 entries miss an index
        // with probability well under 1e-90
        let mut hits = [0usize; 5];
        for _ in 0..1000 {
            hits[resolve(None, 5).index] += 1;
        }
        assert!(hits.iter().all(|&count| count > 0), "hits: {hits:?}");
    }
}
