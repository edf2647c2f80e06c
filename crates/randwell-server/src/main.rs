//! randwell server binary.
//!
//! Plain-HTTP surface:
//! - `GET /random?start=..&end=..` draws a number into the requested range
//! - `GET /health` reports liveness and the served-draw count

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use randwell_server::{app_state, config, router};

const CONFIG_PATH: &str = "randwell.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Strict parsing + validate; a missing file just means defaults.
    let cfg = config::load_or_default(CONFIG_PATH).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "randwell-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
