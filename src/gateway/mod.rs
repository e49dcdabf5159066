//! Status surface
//!
//! Read endpoints over the shared execution record plus the manual claim
//! trigger. Binding the listener is the only startup-fatal condition in the
//! whole service.

pub mod handlers;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats))
        .route("/claim-now", post(handlers::claim_now))
        .with_state(state)
}

/// Start the HTTP status server. Never returns on success.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Status dashboard listening on http://{}", addr);
    println!("📊 JSON stats:     /stats");
    println!("❤️  Health check:  /health");
    println!("🎮 Manual trigger: POST /claim-now");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
