//! Login handler.

use axum::{Json, extract::State, http::StatusCode};
use ember_core::credentials::CredentialPair;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<CredentialPair>, (StatusCode, Json<ErrorResponse>)> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "invalid username or password".to_string(),
            }),
        ));
    }

    // No credential store exists yet; any non-empty pair is accepted.
    // A real password check belongs here.
    let credentials = state.issuer.issue(&request.username).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: e.to_string(),
            }),
        )
    })?;

    debug!(username = %request.username, "credentials issued");
    Ok(Json(credentials))
}
