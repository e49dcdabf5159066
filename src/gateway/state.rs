use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::claimer::{ClaimService, ClaimTracker, ClaimWorker};

/// Gateway shared state. Everything here is injected at startup; handlers
/// only ever read through these handles.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClaimService>,
    pub tracker: Arc<ClaimTracker>,
    pub worker: Arc<ClaimWorker>,
    pub cadence_hours: u64,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        service: Arc<ClaimService>,
        tracker: Arc<ClaimTracker>,
        worker: Arc<ClaimWorker>,
        cadence_hours: u64,
    ) -> Self {
        Self {
            service,
            tracker,
            worker,
            cadence_hours,
            started_at: Utc::now(),
        }
    }
}
