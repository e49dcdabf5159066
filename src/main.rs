//! Monad Faucet Auto Claimer - entry point
//!
//! Startup order: args -> config -> logging -> claim service -> scheduler
//! task -> status server. A missing wallet address degrades every attempt
//! to `no_wallet_configured` instead of failing startup; the only fatal
//! startup condition is the status server failing to bind.

use std::sync::Arc;

use monad_faucet_claimer::claimer::{ClaimService, ClaimTracker, ClaimWorker, FaucetClient};
use monad_faucet_claimer::config::AppConfig;
use monad_faucet_claimer::gateway::{self, state::AppState};
use monad_faucet_claimer::logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _log_guard = logging::init_logging(&config);

    tracing::info!(
        "Starting Monad faucet auto claimer (env: {}, build: {})",
        env,
        env!("GIT_HASH")
    );

    let wallet = std::env::var("WALLET_ADDRESS").ok();

    let client = FaucetClient::new(&config.faucet)?;
    let tracker = Arc::new(ClaimTracker::new(config.faucet.claim_interval()));
    let service = Arc::new(ClaimService::new(client, tracker.clone(), wallet));

    match service.wallet_masked() {
        Some(masked) => tracing::info!("Wallet configured: {}", masked),
        None => tracing::warn!(
            "WALLET_ADDRESS not set - every claim will report no_wallet_configured"
        ),
    }

    let worker = Arc::new(ClaimWorker::new(
        service.clone(),
        tracker.clone(),
        config.faucet.initial_delay(),
        config.faucet.claim_interval(),
    ));
    let scheduler = worker.clone();
    tokio::spawn(async move {
        scheduler.run().await;
    });

    let port = get_port_override()
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(config.gateway.port);
    let state = Arc::new(AppState::new(
        service,
        tracker,
        worker,
        config.faucet.claim_interval_hours,
    ));

    gateway::run_server(&config.gateway.host, port, state).await;

    Ok(())
}
