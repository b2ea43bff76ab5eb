//! HTTP protocol layer module
//!
//! Response building, cache policies and MIME lookup, decoupled from the
//! request flow.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use cache::CachePolicy;
pub use response::{
    apply_cache_control, build_403_response, build_404_response, build_405_response,
    build_413_response, build_500_response, build_health_response, build_json_response,
    build_options_response, build_proxy_response, build_redirect_response, full_body, stream_body,
    ResponseBody,
};
