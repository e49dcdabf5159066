//! Faucet claim loop
//!
//! Everything between the scheduler tick and the recorded outcome:
//! - [`client`] - one POST per attempt against the faucet endpoint
//! - [`outcome`] - total classification of responses into [`ClaimOutcome`]
//! - [`state`] - the shared execution record
//! - [`service`] - the attempt pipeline both scheduled and manual paths use
//! - [`worker`] - initial kick + 4-hour cadence

pub mod client;
pub mod error;
pub mod outcome;
pub mod service;
pub mod state;
pub mod worker;

pub use client::{AttemptResult, FaucetClient};
pub use error::ClaimerError;
pub use outcome::{
    ClaimOutcome, ClaimReward, CooldownInfo, OutcomeKind, TransportFailure, UnexpectedDetail,
    classify_response, format_wait,
};
pub use service::ClaimService;
pub use state::{ClaimTracker, ExecutionRecord};
pub use worker::{ClaimWorker, SchedulerPhase};
