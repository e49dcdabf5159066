use axum::{Json, extract::State, response::Html};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::claimer::OutcomeKind;

use super::state::AppState;
use super::types::{ClaimNowResponse, HealthResponse, StatsResponse};

/// GET / - status dashboard, auto-refreshes every 60 seconds.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let snap = state.tracker.snapshot().await;

    let wallet = state
        .service
        .wallet_masked()
        .unwrap_or_else(|| "not configured".to_string());
    let (result_label, result_color) = match snap.last_result {
        Some(OutcomeKind::Success) => ("claim succeeded", "#4CAF50"),
        Some(OutcomeKind::AlreadyClaimed) => ("already claimed (normal)", "#ff9800"),
        Some(OutcomeKind::ConnectionError) => ("connection error", "#f44336"),
        Some(OutcomeKind::UnexpectedError) => ("unexpected error", "#f44336"),
        Some(OutcomeKind::NoWalletConfigured) => ("no wallet configured", "#f44336"),
        None => ("no executions yet", "#888"),
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Monad Faucet Auto Claimer</title>
    <meta http-equiv="refresh" content="60">
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; background: #1a1a1a; color: #fff; }}
        .header {{ text-align: center; border-bottom: 2px solid #333; padding-bottom: 20px; margin-bottom: 30px; }}
        .stats {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin: 20px 0; }}
        .stat-item {{ background: #333; padding: 15px; border-radius: 8px; }}
        .button {{ background: #4CAF50; color: white; padding: 10px 20px; border: none; border-radius: 5px; cursor: pointer; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Monad Faucet Auto Claimer</h1>
        <p>claiming automatically every {cadence_hours} hours</p>
    </div>
    <div class="stats">
        <div class="stat-item">
            <h3>Statistics</h3>
            <p><strong>Total executions:</strong> {total}</p>
            <p><strong>Successful claims:</strong> {successes}</p>
            <p><strong>Wallet:</strong> {wallet}</p>
        </div>
        <div class="stat-item">
            <h3>Timing</h3>
            <p><strong>Last execution:</strong><br>{last_execution}</p>
            <p><strong>Next execution:</strong><br>{next_execution}</p>
        </div>
        <div class="stat-item">
            <h3>Current state</h3>
            <p><span style="color: {result_color};">{result_label}</span></p>
        </div>
    </div>
    <div class="stat-item">
        <h3>Controls</h3>
        <form method="post" action="/claim-now"><button class="button" type="submit">Claim now</button></form>
        <p><small>JSON stats at <code>/stats</code>, liveness at <code>/health</code>. Page refreshes every 60s.</small></p>
    </div>
</body>
</html>"#,
        cadence_hours = state.cadence_hours,
        total = snap.total_executions,
        successes = snap.successful_claims,
        wallet = wallet,
        last_execution = fmt_time(snap.last_execution),
        next_execution = fmt_time(snap.next_execution),
        result_color = result_color,
        result_label = result_label,
    );

    Html(html)
}

/// GET /health - liveness probe.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snap = state.tracker.snapshot().await;
    let now = Utc::now();

    Json(HealthResponse {
        status: "monad faucet claimer running",
        timestamp: now,
        uptime_secs: (now - state.started_at).num_seconds(),
        wallet_configured: state.service.wallet_configured(),
        scheduler_phase: state.worker.phase().await,
        last_execution: snap.last_execution,
        last_result: snap.last_result,
        next_execution: snap.next_execution,
        total_executions: snap.total_executions,
        successful_claims: snap.successful_claims,
    })
}

/// GET /stats - execution record as JSON.
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let snap = state.tracker.snapshot().await;

    Json(StatsResponse {
        wallet_address: state.service.wallet().map(str::to_string),
        last_execution: snap.last_execution,
        last_result: snap.last_result,
        next_execution: snap.next_execution,
        total_executions: snap.total_executions,
        successful_claims: snap.successful_claims,
        success_rate: snap.success_rate(),
    })
}

/// POST /claim-now - run one attempt synchronously and report its outcome.
/// Bounded by the client timeout, so this never blocks longer than one
/// attempt.
pub async fn claim_now(State(state): State<Arc<AppState>>) -> Json<ClaimNowResponse> {
    info!("manual claim requested");
    let outcome = state.service.execute_claim().await;

    Json(ClaimNowResponse {
        result: outcome.kind(),
        message: outcome.describe(),
        timestamp: Utc::now(),
    })
}

fn fmt_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "never".to_string(),
    }
}
