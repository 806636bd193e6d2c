//! HTTP API surface for Ember services.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use routes::create_router;
pub use state::AppState;
