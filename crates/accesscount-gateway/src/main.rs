//! accesscount gateway binary.
//!
//! Hosts a minimal axum app with the counting middleware attached; every
//! completed request increments the day's PV and endpoint counters.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use accesscount_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("accesscount.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).await;
    let app = router::build_router(state);

    tracing::info!(%listen, "accesscount-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
