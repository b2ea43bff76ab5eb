//! Query string parsing module
//!
//! The service understands three parameters: `id` (takes a value), `json`
//! and `raw` (presence-only flags). None of them needs percent decoding, so
//! the raw query string is split directly.

/// Parsed query parameters
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Requested list index, verbatim
    pub id: Option<String>,
    /// JSON output mode requested
    pub json: bool,
    /// Raw proxy mode requested
    pub raw: bool,
}

/// Parse the raw query string, if any
pub fn parse(query: Option<&str>) -> QueryParams {
    let mut params = QueryParams::default();
    let Some(query) = query else {
        return params;
    };

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (pair, None),
        };
        match key {
            "id" => params.id = value.map(ToString::to_string),
            "json" => params.json = true,
            "raw" => params.raw = true,
            _ => {}
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert_eq!(parse(None), QueryParams::default());
        assert_eq!(parse(Some("")).id, None);
    }

    #[test]
    fn test_id_with_value() {
        let params = parse(Some("id=42"));
        assert_eq!(params.id.as_deref(), Some("42"));
        assert!(!params.json);
        assert!(!params.raw);
    }

    #[test]
    fn test_presence_only_flags() {
        let params = parse(Some("json"));
        assert!(params.json);

        // A value does not change presence semantics
        let params = parse(Some("json=&raw=0"));
        assert!(params.json);
        assert!(params.raw);
    }

    #[test]
    fn test_combined_parameters() {
        let params = parse(Some("id=3&json&raw"));
        assert_eq!(params.id.as_deref(), Some("3"));
        assert!(params.json);
        assert!(params.raw);
    }

    #[test]
    fn test_valueless_id_stays_absent() {
        assert_eq!(parse(Some("id")).id, None);
    }

    #[test]
    fn test_unknown_parameters_are_ignored() {
        let params = parse(Some("foo=bar&baz"));
        assert_eq!(params, QueryParams::default());
    }
}
