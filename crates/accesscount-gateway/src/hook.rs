//! Axum middleware that counts every completed request.
//!
//! Attached to the router so it wraps all routes. The endpoint identifier is
//! the matched route template; requests that never matched a route still
//! count toward the PV total. The response is passed through untouched.

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

pub async fn track_access(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned());

    let res = next.run(req).await;

    state.counter().record(endpoint.as_deref()).await;

    res
}
