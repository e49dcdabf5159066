//! Shared execution record
//!
//! One [`ClaimTracker`] instance lives for the whole process and is the only
//! state both the scheduler and the status surface touch. Every mutation and
//! every snapshot goes through the lock; the lock is never held across a
//! network call.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use super::outcome::{ClaimOutcome, OutcomeKind};

/// Point-in-time view of the claim loop. Cloned out on every read so no
/// caller can observe a half-updated record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionRecord {
    pub last_execution: Option<DateTime<Utc>>,
    pub next_execution: Option<DateTime<Utc>>,
    pub total_executions: u64,
    pub successful_claims: u64,
    pub last_result: Option<OutcomeKind>,
}

impl ExecutionRecord {
    /// Success percentage over all attempts, `0.0` before the first one.
    pub fn success_rate(&self) -> f64 {
        if self.total_executions == 0 {
            return 0.0;
        }
        self.successful_claims as f64 / self.total_executions as f64 * 100.0
    }
}

/// Serialized access to the execution record.
pub struct ClaimTracker {
    record: RwLock<ExecutionRecord>,
    cadence_secs: i64,
}

impl ClaimTracker {
    pub fn new(cadence: std::time::Duration) -> Self {
        Self {
            record: RwLock::new(ExecutionRecord::default()),
            cadence_secs: cadence.as_secs() as i64,
        }
    }

    /// Mark the start of an attempt. Returns the attempt number for logging.
    pub async fn record_attempt_start(&self) -> u64 {
        let mut record = self.record.write().await;
        record.last_execution = Some(Utc::now());
        record.total_executions += 1;
        record.total_executions
    }

    /// Record the classified result of the attempt and push the estimated
    /// next execution one cadence out.
    pub async fn record_outcome(&self, outcome: &ClaimOutcome) {
        let mut record = self.record.write().await;
        record.last_result = Some(outcome.kind());
        if matches!(outcome, ClaimOutcome::Success(_)) {
            record.successful_claims += 1;
        }
        record.next_execution = Some(Utc::now() + Duration::seconds(self.cadence_secs));
    }

    /// Scheduler-startup precompute of the displayed next execution.
    pub async fn set_next_execution(&self, at: DateTime<Utc>) {
        self.record.write().await.next_execution = Some(at);
    }

    pub async fn snapshot(&self) -> ExecutionRecord {
        self.record.read().await.clone()
    }
}
