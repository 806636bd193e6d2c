//! API route definitions.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::handlers::{health, login, whoami};
use crate::middleware;
use crate::state::AppState;

/// Create the main API router.
pub fn create_router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/whoami", get(whoami::whoami))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::require_token,
        ));

    Router::new()
        .route("/login", post(login::login))
        .route(
            "/healthy",
            get(health::get)
                .post(health::post)
                .put(health::put)
                .delete(health::delete)
                .patch(health::patch),
        )
        .merge(gated)
        .layer(middleware::cors_layer())
        .with_state(state)
}
