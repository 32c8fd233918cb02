//! Request/response access log
//!
//! Hooks for `tower_http::trace::TraceLayer`: one span per request carrying
//! method, path, query, client address, user agent and request id, an event
//! when the request arrives and one when the response leaves.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::{Body, HttpBody};
use axum::extract::ConnectInfo;
use axum::http::{header, Request, Response};
use tower_http::classify::ServerErrorsFailureClass;
use tracing::Span;

/// User agents are cut to this many characters in the log
const USER_AGENT_MAX_CHARS: usize = 50;

/// Header set by `SetRequestIdLayer`
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn make_span(request: &Request<Body>) -> Span {
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|ua| truncate_chars(ua, USER_AGENT_MAX_CHARS))
        .unwrap_or("unknown");

    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        query = request.uri().query().unwrap_or("-"),
        client_ip = %client_ip,
        user_agent = user_agent,
        request_id = request_id,
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::info!("Incoming request");
}

/// `content-length` is only added further out, so the size comes from the body.
pub fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let size = response_size(response);

    tracing::info!(
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        size = %size,
        "Response sent"
    );
}

fn response_size(response: &Response<Body>) -> String {
    response
        .body()
        .size_hint()
        .exact()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn on_failure(failure: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        %failure,
        latency_ms = latency.as_millis() as u64,
        "Request failed"
    );
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
