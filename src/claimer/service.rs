//! Claim execution service
//!
//! The single path every attempt takes, scheduled or manual: record the
//! start, run the request (or short-circuit when no wallet is configured),
//! record the classified outcome. Concurrent attempts may overlap on the
//! network; their record updates serialize through the tracker.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::client::{AttemptResult, FaucetClient};
use super::outcome::{ClaimOutcome, format_wait};
use super::state::ClaimTracker;

pub struct ClaimService {
    client: FaucetClient,
    tracker: Arc<ClaimTracker>,
    wallet: Option<String>,
}

impl ClaimService {
    /// A blank or whitespace-only wallet counts as unconfigured.
    pub fn new(client: FaucetClient, tracker: Arc<ClaimTracker>, wallet: Option<String>) -> Self {
        let wallet = wallet.filter(|w| !w.trim().is_empty());
        Self {
            client,
            tracker,
            wallet,
        }
    }

    pub fn wallet_configured(&self) -> bool {
        self.wallet.is_some()
    }

    /// Wallet shortened for display: `0x12345678...abcdefgh`.
    pub fn wallet_masked(&self) -> Option<String> {
        self.wallet.as_deref().map(mask_wallet)
    }

    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    /// Run exactly one attempt and return its outcome.
    pub async fn execute_claim(&self) -> ClaimOutcome {
        let claim_no = self.tracker.record_attempt_start().await;

        let outcome = match self.wallet.as_deref() {
            None => {
                warn!("claim #{}: no wallet address configured", claim_no);
                ClaimOutcome::NoWalletConfigured
            }
            Some(wallet) => {
                info!("claim #{}: requesting for {}", claim_no, mask_wallet(wallet));
                let AttemptResult { outcome, elapsed } = self.client.claim(wallet).await;
                log_outcome(claim_no, &outcome, elapsed);
                outcome
            }
        };

        self.tracker.record_outcome(&outcome).await;
        outcome
    }
}

fn log_outcome(claim_no: u64, outcome: &ClaimOutcome, elapsed: std::time::Duration) {
    match outcome {
        ClaimOutcome::Success(reward) => {
            info!(
                "claim #{}: success in {:?} (amount: {}, tx: {}, tier: {})",
                claim_no,
                elapsed,
                reward.amount.as_deref().unwrap_or("?"),
                reward.transaction_hash.as_deref().unwrap_or("?"),
                reward.tier.as_deref().unwrap_or("?"),
            );
            if let Some(next) = reward.next_claim_available {
                info!("claim #{}: next claim available at {}", claim_no, next);
            }
        }
        ClaimOutcome::AlreadyClaimed(cooldown) => {
            // Expected steady state while the wallet is inside its window.
            info!(
                "claim #{}: already claimed ({})",
                claim_no,
                cooldown
                    .remaining_secs
                    .map(format_wait)
                    .unwrap_or_else(|| "remaining time unknown".to_string()),
            );
        }
        ClaimOutcome::ConnectionError(failure) => {
            warn!("claim #{}: {} after {:?}", claim_no, failure, elapsed);
        }
        ClaimOutcome::UnexpectedError(detail) => {
            error!("claim #{}: unexpected response: {}", claim_no, detail.message);
            if let Some(ref excerpt) = detail.raw_excerpt {
                error!("claim #{}: raw body: {}", claim_no, excerpt);
            }
        }
        ClaimOutcome::NoWalletConfigured => {}
    }
}

fn mask_wallet(wallet: &str) -> String {
    let chars: Vec<char> = wallet.chars().collect();
    if chars.len() <= 18 {
        return wallet.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}
