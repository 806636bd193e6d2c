//! HTTP middleware for the API server.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use ember_auth::GateDecision;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Create CORS middleware layer.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(Any)
}

/// Require a valid access or refresh token before invoking the handler.
///
/// A denial short-circuits with the fixed 401 payload and never reaches
/// the handler. On success the verified claims are stored in request
/// extensions for handlers that want the caller identity, and the
/// handler response is returned unchanged.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = bearer_token(&request);

    match state.gate.evaluate(token.as_deref()) {
        GateDecision::Allowed(claims) => {
            if let Some(claims) = claims {
                request.extensions_mut().insert(claims);
            }
            next.run(request).await
        }
        GateDecision::Denied => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "user not logged" })),
        )
            .into_response(),
    }
}

fn bearer_token(request: &Request<Body>) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}
