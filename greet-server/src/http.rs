//! HTTP surface: the router and the `/api/hello` handler.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use greet_core::GreetingService;

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    service: Arc<GreetingService>,
}

pub fn router(service: GreetingService) -> Router {
    let state = AppState { service: Arc::new(service) };

    Router::new().route("/api/hello", get(hello)).with_state(state)
}

#[derive(Debug, Deserialize)]
struct HelloQuery {
    visitor_name: Option<String>,
}

/// GET /api/hello - greet the visitor with local temperature and city.
async fn hello(
    State(state): State<AppState>,
    Query(query): Query<HelloQuery>,
    headers: HeaderMap,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> Response {
    let client_address = client_address(&headers, peer);

    let info = match state
        .service
        .greet(query.visitor_name.as_deref(), Some(&client_address))
        .await
    {
        Ok(info) => info,
        Err(err) => {
            log::error!("Greeting lookup failed: {err:#}");
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}")).into_response();
        }
    };

    match serde_json::to_string_pretty(&info) {
        Ok(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(err) => {
            log::error!("Failed to encode response: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode response".to_string())
                .into_response()
        }
    }
}

/// Determine the client address: the first entry of `X-Forwarded-For` when
/// a proxy set it, otherwise the transport peer IP (port stripped).
fn client_address(headers: &HeaderMap, peer: SocketAddr) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    peer.ip().to_string()
}
