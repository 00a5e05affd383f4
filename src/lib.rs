pub mod config;
pub mod relay;
pub mod routes;
pub mod signer;
pub mod state;
pub mod status;
pub mod wallet;

// Expose a router builder so main.rs can stay tiny.
use axum::Router;
use state::AppState;

pub fn app(state: AppState) -> Router {
    routes::router(state)
}
