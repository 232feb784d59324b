use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use std::{net::SocketAddr, sync::Arc};

use crate::expenses;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Liveness probe.
async fn ok() -> &'static str {
    "ok"
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/ok", get(ok))
        .route("/api/expenses", post(expenses::create).get(expenses::list))
        .route("/api/expenses/stats/total", get(expenses::totals))
        .route(
            "/api/expenses/category/{category}",
            get(expenses::list_by_category),
        )
        .route(
            "/api/expenses/{id}",
            get(expenses::get).put(expenses::update).delete(expenses::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Builds the HTTP application around an engine, without binding a socket.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

/// Serves on `listener` until Ctrl+C is received.
pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Serves in a background task and returns the bound address.
pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested, draining connections"),
        Err(err) => {
            tracing::error!("failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}
