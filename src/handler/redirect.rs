//! Selection endpoint module
//!
//! The whole flow behind `GET /`: classify the device, load its URL list,
//! resolve the requested or random index, then answer in redirect, JSON or
//! raw-proxy form. Whatever cache policy the resolution produced is applied
//! to the response regardless of mode.

use std::sync::Arc;

use hyper::header::{HeaderValue, CONTENT_TYPE, REFERRER_POLICY};
use hyper::Response;
use serde::Serialize;

use crate::config::AppState;
use crate::handler::device;
use crate::handler::query::QueryParams;
use crate::http::{self, mime, ResponseBody};
use crate::logger;
use crate::sources::{loader, select};

/// JSON body for `json` mode; field order is part of the wire format
#[derive(Debug, Serialize)]
struct SelectionBody<'a> {
    id: usize,
    url: &'a str,
}

/// Request-scoped inputs for the selection flow
pub struct RedirectRequest<'a> {
    pub params: QueryParams,
    pub user_agent: &'a str,
    pub host: Option<&'a str>,
    pub is_head: bool,
}

/// Handle a selection request; all unexpected failures collapse into the
/// generic 500 response
pub async fn handle(req: RedirectRequest<'_>, state: &Arc<AppState>) -> Response<ResponseBody> {
    match try_handle(req, state).await {
        Ok(response) => response,
        Err(e) => {
            logger::log_error(&format!("Selection flow failed: {e}"));
            http::build_500_response()
        }
    }
}

async fn try_handle(
    req: RedirectRequest<'_>,
    state: &Arc<AppState>,
) -> Result<Response<ResponseBody>, hyper::http::Error> {
    let list_name = device::list_for(req.user_agent, &state.config.sources);
    let urls = loader::load(&state.client, req.host, list_name, &state.config.sources).await;

    let selection = select::resolve(req.params.id.as_deref(), urls.len());
    let Some(url) = urls.get(selection.index) else {
        logger::log_error(&format!(
            "Resolved index {} outside list of {} entries",
            selection.index,
            urls.len()
        ));
        return Ok(http::build_500_response());
    };

    let mut response = if req.params.json {
        let body = SelectionBody {
            id: selection.index,
            url,
        };
        http::build_json_response(&body, req.is_head)?
    } else if req.params.raw {
        if state.config.http.allow_raw_output {
            proxy_selected(state, url, req.is_head).await?
        } else {
            http::build_403_response()
        }
    } else {
        let mut response = http::build_redirect_response(url)?;
        response
            .headers_mut()
            .insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
        response
    };

    http::apply_cache_control(&mut response, selection.cache);
    Ok(response)
}

/// Stream the selected URL through, falling back to a redirect on failure
async fn proxy_selected(
    state: &Arc<AppState>,
    url: &str,
    is_head: bool,
) -> Result<Response<ResponseBody>, hyper::http::Error> {
    let upstream = match state
        .client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
    {
        Ok(upstream) => upstream,
        Err(e) => {
            logger::log_warning(&format!("Upstream fetch failed for '{url}': {e}"));
            return http::build_redirect_response(url);
        }
    };

    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| mime::guess_for_url(url).to_string(), ToString::to_string);

    let body = if is_head {
        http::full_body("")
    } else {
        http::stream_body(upstream.bytes_stream())
    };
    http::build_proxy_response(&content_type, body)
}
