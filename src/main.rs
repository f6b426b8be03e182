use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

mod config;
mod http;
mod room;
mod telemetry;
mod util;

use crate::http::AppState;
use crate::util::id::ThreadRngSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init()?;

    let state = AppState::new(Arc::new(ThreadRngSource), config::room_id_length());
    let static_dir = config::static_dir();
    tracing::debug!(room_id_len = state.room_id_len, static_dir = %static_dir.display(), "config loaded");

    let app = http::router(state, static_dir);

    let addr: SocketAddr = config::server_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
