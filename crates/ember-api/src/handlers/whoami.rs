//! Identity echo for gated requests.

use axum::{Extension, Json};
use ember_auth::Claims;
use serde::Serialize;

#[derive(Serialize)]
pub struct WhoamiResponse {
    pub username: String,
}

/// Returns the identity the gate verified. Only reachable behind
/// `middleware::require_token`, which injects the claims.
pub async fn whoami(Extension(claims): Extension<Claims>) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        username: claims.sub,
    })
}
