//! Claim scheduler
//!
//! Two-phase loop: one fast kick shortly after startup so a fresh deploy
//! shows activity within a minute, then the steady 4-hour cadence. The kick
//! is straight-line code ahead of the loop, so it structurally cannot fire
//! twice. Manual triggers run through the same [`ClaimService`] and never
//! touch this loop's timing.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::info;

use super::service::ClaimService;
use super::state::ClaimTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerPhase {
    /// Before the startup kick has run.
    InitialPending,
    /// Recurring cadence active.
    Steady,
}

pub struct ClaimWorker {
    service: Arc<ClaimService>,
    tracker: Arc<ClaimTracker>,
    initial_delay: Duration,
    cadence: Duration,
    phase: RwLock<SchedulerPhase>,
}

impl ClaimWorker {
    pub fn new(
        service: Arc<ClaimService>,
        tracker: Arc<ClaimTracker>,
        initial_delay: Duration,
        cadence: Duration,
    ) -> Self {
        Self {
            service,
            tracker,
            initial_delay,
            cadence,
            phase: RwLock::new(SchedulerPhase::InitialPending),
        }
    }

    pub async fn phase(&self) -> SchedulerPhase {
        *self.phase.read().await
    }

    /// Run forever. No attempt outcome ever terminates the loop.
    pub async fn run(&self) {
        info!(
            "scheduler starting: first claim in {:?}, then every {:?}",
            self.initial_delay, self.cadence
        );

        // Displayed next-execution is one full cadence out even though the
        // startup kick runs sooner; the kick is not a cadence tick. See
        // DESIGN.md D1.
        self.tracker
            .set_next_execution(Utc::now() + chrono::Duration::seconds(self.cadence.as_secs() as i64))
            .await;

        sleep(self.initial_delay).await;
        info!("running startup claim");
        self.service.execute_claim().await;

        *self.phase.write().await = SchedulerPhase::Steady;
        info!("scheduler entering steady cadence");

        loop {
            sleep(self.cadence).await;
            self.service.execute_claim().await;
        }
    }
}
