use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::claimer::{OutcomeKind, SchedulerPhase};

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime_secs: i64,
    pub wallet_configured: bool,
    pub scheduler_phase: SchedulerPhase,
    pub last_execution: Option<DateTime<Utc>>,
    pub last_result: Option<OutcomeKind>,
    pub next_execution: Option<DateTime<Utc>>,
    pub total_executions: u64,
    pub successful_claims: u64,
}

/// GET /stats response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub wallet_address: Option<String>,
    pub last_execution: Option<DateTime<Utc>>,
    pub last_result: Option<OutcomeKind>,
    pub next_execution: Option<DateTime<Utc>>,
    pub total_executions: u64,
    pub successful_claims: u64,
    /// Percentage over all attempts, 0 before the first one.
    pub success_rate: f64,
}

/// POST /claim-now response: the outcome of that specific invocation.
#[derive(Debug, Serialize)]
pub struct ClaimNowResponse {
    pub result: OutcomeKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
