//! Application state shared across handlers.

use ember_auth::{TokenGate, TokenIssuer, TokenVerifier};
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<TokenIssuer>,
    pub gate: Arc<TokenGate>,
}

impl AppState {
    /// Build state from the JWT signing secret.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            issuer: Arc::new(TokenIssuer::new(jwt_secret)),
            gate: Arc::new(TokenGate::new(TokenVerifier::new(jwt_secret))),
        }
    }
}
