//! Monad Faucet Auto Claimer
//!
//! Claims from the Morkie Monad faucet on a fixed cadence and serves a
//! status dashboard over HTTP.
//!
//! # Modules
//!
//! - [`claimer`] - the claim loop: client, classifier, shared record,
//!   service, scheduler
//! - [`config`] - YAML + env configuration
//! - [`gateway`] - the HTTP status surface
//! - [`logging`] - tracing setup

pub mod claimer;
pub mod config;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use claimer::{
    ClaimOutcome, ClaimService, ClaimTracker, ClaimWorker, ClaimerError, ExecutionRecord,
    FaucetClient, OutcomeKind, SchedulerPhase, classify_response,
};
pub use config::AppConfig;
