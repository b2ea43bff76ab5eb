//! HTTP response building module
//!
//! Builders for the responses the service emits, decoupled from the request
//! flow. Bodies are boxed so the raw proxy mode can stream an upstream
//! transfer while every other response stays an in-memory `Full` body.
//!
//! Builders whose headers carry fixed values absorb the impossible build
//! error with a logged fallback; builders that place list-file content into
//! a header (`Location`, upstream `Content-Type`) propagate the error so the
//! caller can answer with the 500 response.

use futures::TryStreamExt;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use hyper::header::{HeaderValue, CACHE_CONTROL};
use hyper::Response;
use serde::Serialize;

use super::cache::CachePolicy;

/// Body type shared by every response the service produces
pub type ResponseBody = UnsyncBoxBody<Bytes, std::io::Error>;

/// Wrap a fixed payload as a response body
pub fn full_body(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Wrap an upstream byte stream as a response body
pub fn stream_body<S>(stream: S) -> ResponseBody
where
    S: futures::Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
{
    StreamBody::new(stream.map_ok(Frame::data).map_err(std::io::Error::other)).boxed_unsync()
}

/// Build 302 redirect response
///
/// `Location` carries a line from the list file, which may not be a legal
/// header value.
pub fn build_redirect_response(
    target: &str,
) -> Result<Response<ResponseBody>, hyper::http::Error> {
    Response::builder()
        .status(302)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(full_body("Redirecting..."))
}

/// Build JSON response with cross-origin access allowed
///
/// The body is compact (no pretty-printing); clients treat it as a stable
/// wire format.
pub fn build_json_response<T: Serialize>(
    body: &T,
    is_head: bool,
) -> Result<Response<ResponseBody>, hyper::http::Error> {
    let json = serde_json::to_string(body).unwrap_or_else(|e| {
        log_build_error("JSON", &e);
        String::from("{}")
    });
    let content_length = json.len();
    let payload = if is_head { String::new() } else { json };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .header("Access-Control-Allow-Origin", "*")
        .body(full_body(payload))
}

/// Build a proxied response carrying an upstream body
pub fn build_proxy_response(
    content_type: &str,
    body: ResponseBody,
) -> Result<Response<ResponseBody>, hyper::http::Error> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .body(body)
}

/// Build 403 Forbidden response
pub fn build_403_response() -> Response<ResponseBody> {
    Response::builder()
        .status(403)
        .header("Content-Type", "text/plain")
        .body(full_body("Forbidden"))
        .unwrap_or_else(|e| {
            log_build_error("403", &e);
            Response::new(full_body("Forbidden"))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<ResponseBody> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(full_body("404 Not Found"))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(full_body("404 Not Found"))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<ResponseBody> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(full_body("405 Method Not Allowed"))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(full_body("405 Method Not Allowed"))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<ResponseBody> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(full_body("413 Payload Too Large"))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(full_body("413 Payload Too Large"))
        })
}

/// Build 500 Internal Server Error response
///
/// Deliberately generic; nothing about the failure leaks to the client.
pub fn build_500_response() -> Response<ResponseBody> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(full_body("Server Error"))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(full_body("Server Error"))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<ResponseBody> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(full_body("")).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(full_body(""))
    })
}

/// Build health probe response
pub fn build_health_response(status: &'static str) -> Response<ResponseBody> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .body(full_body(status))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(full_body(status))
        })
}

/// Apply the selection's cache policy to an already-built response
///
/// `None` leaves the response without any Cache-Control header.
pub fn apply_cache_control(response: &mut Response<ResponseBody>, policy: Option<CachePolicy>) {
    let Some(policy) = policy else { return };
    match HeaderValue::from_str(&policy.to_header_value()) {
        Ok(value) => {
            response.headers_mut().insert(CACHE_CONTROL, value);
        }
        Err(e) => log_build_error("Cache-Control", &e),
    }
}

/// Log response build error
fn log_build_error(what: &str, error: &impl std::fmt::Display) {
    crate::logger::log_error(&format!("Failed to build {what} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_response() {
        let resp = build_redirect_response("https://example.com/a.webp").unwrap();
        assert_eq!(resp.status(), 302);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "https://example.com/a.webp"
        );
    }

    #[test]
    fn test_redirect_rejects_bad_header_value() {
        assert!(build_redirect_response("https://bad\nvalue").is_err());
    }

    #[test]
    fn test_json_response_headers() {
        let resp = build_json_response(&serde_json::json!({"id": 0}), false).unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_forbidden_response() {
        let resp = build_403_response();
        assert_eq!(resp.status(), 403);
    }

    #[test]
    fn test_apply_cache_control() {
        let mut resp = build_403_response();
        apply_cache_control(&mut resp, Some(CachePolicy::Public(86_400)));
        assert_eq!(
            resp.headers().get("Cache-Control").unwrap(),
            "public, max-age=86400"
        );

        let mut resp = build_403_response();
        apply_cache_control(&mut resp, None);
        assert!(resp.headers().get("Cache-Control").is_none());
    }
}
