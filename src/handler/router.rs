//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, health
//! probes, the selection route, and access logging.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use hyper::body::Body;
use hyper::header::{HeaderValue, SERVER};
use hyper::{Method, Request, Response, Version};

use crate::config::AppState;
use crate::handler::query::{self, QueryParams};
use crate::handler::redirect::{self, RedirectRequest};
use crate::http::{self, ResponseBody};
use crate::logger::{self, AccessLogEntry};

/// Liveness probe path
const LIVENESS_PATH: &str = "/healthz";
/// Readiness probe path
const READINESS_PATH: &str = "/readyz";

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<ResponseBody>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();
    let is_head = method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(&method, &uri, version);
    }

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. Log headers if enabled
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // 4. Extract the headers the selection flow needs
    let user_agent = header_value(&req, "user-agent").unwrap_or_default();
    let host = header_value(&req, "host");
    let referer = header_value(&req, "referer");

    let params = query::parse(uri.query());

    // 5. Dispatch
    let mut response =
        route_request(uri.path(), params, &user_agent, host.as_deref(), is_head, &state).await;

    if let Ok(value) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }

    // 6. Access log with response outcome and timing
    if access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = format_version(version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_size(&response);
        entry.referer = referer;
        entry.user_agent = if user_agent.is_empty() {
            None
        } else {
            Some(user_agent)
        };
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on path
async fn route_request(
    path: &str,
    params: QueryParams,
    user_agent: &str,
    host: Option<&str>,
    is_head: bool,
    state: &Arc<AppState>,
) -> Response<ResponseBody> {
    // Health probes first, always fast
    if path == LIVENESS_PATH || path == READINESS_PATH {
        return http::build_health_response("ok");
    }

    if path == "/" {
        let req = RedirectRequest {
            params,
            user_agent,
            host,
            is_head,
        };
        return redirect::handle(req, state).await;
    }

    http::build_404_response()
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<ResponseBody>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<ResponseBody>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Header value as an owned string, if present and valid UTF-8
fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

/// Response body size, when the body reports an exact one
fn body_size(response: &Response<ResponseBody>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|size| usize::try_from(size).ok())
        .unwrap_or(0)
}

/// Access-log spelling of the HTTP version
fn format_version(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_gate() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());

        let resp = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(resp.status(), 204);

        let resp = check_http_method(&Method::POST, false).unwrap();
        assert_eq!(resp.status(), 405);
    }

    #[test]
    fn test_options_with_cors() {
        let resp = check_http_method(&Method::OPTIONS, true).unwrap();
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }

    #[test]
    fn test_format_version() {
        assert_eq!(format_version(Version::HTTP_10), "1.0");
        assert_eq!(format_version(Version::HTTP_11), "1.1");
        assert_eq!(format_version(Version::HTTP_2), "2");
    }

    #[test]
    fn test_body_size_of_full_body() {
        let resp = http::build_404_response();
        assert_eq!(body_size(&resp), "404 Not Found".len());
    }
}
