//! Axum router wiring.
//!
//! Demo routes plus the counting layer; the layer wraps every route so each
//! completed request lands in the day's counters.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, hook};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            hook::track_access,
        ))
        .with_state(state)
}

async fn index() -> &'static str {
    "accesscount gateway\n"
}

async fn healthz() -> &'static str {
    "ok\n"
}
