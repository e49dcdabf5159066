//! Claim outcome classification
//!
//! Turns a raw faucet response (status code + body) into exactly one
//! [`ClaimOutcome`]. The function is total: any body the faucet can send,
//! including garbage, maps to a variant. Precedence:
//!
//! 1. Transport failure (mapped by the client before this module is reached)
//! 2. Empty body
//! 3. Unparseable body
//! 4. HTTP 200 with truthy `success`
//! 5. HTTP 429 or `type == "wallet_limit"`
//! 6. Everything else

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Maximum number of characters of a raw body kept for diagnostics.
const RAW_EXCERPT_CHARS: usize = 500;

/// Transport-level failure, before any HTTP status exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request error: {0}")]
    Request(String),
}

/// Payload of a successful claim. Every field is optional: the faucet has
/// been observed omitting any of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClaimReward {
    pub amount: Option<String>,
    pub transaction_hash: Option<String>,
    pub tier: Option<String>,
    pub morkie_balance: Option<String>,
    pub next_claim_available: Option<DateTime<Utc>>,
}

/// Payload of a rate-limited claim (wallet still in its cooldown window).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CooldownInfo {
    pub message: Option<String>,
    pub remaining_secs: Option<u64>,
    pub next_claim_available: Option<DateTime<Utc>>,
}

/// Payload of an unrecognized response.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedDetail {
    pub message: String,
    /// Bounded excerpt of the raw body, only kept when the body failed to
    /// parse.
    pub raw_excerpt: Option<String>,
}

/// Classified result of one claim attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome {
    Success(ClaimReward),
    AlreadyClaimed(CooldownInfo),
    ConnectionError(TransportFailure),
    UnexpectedError(UnexpectedDetail),
    NoWalletConfigured,
}

/// Bare classification tag, the only part of an outcome retained in the
/// execution record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    AlreadyClaimed,
    ConnectionError,
    UnexpectedError,
    NoWalletConfigured,
}

impl ClaimOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            ClaimOutcome::Success(_) => OutcomeKind::Success,
            ClaimOutcome::AlreadyClaimed(_) => OutcomeKind::AlreadyClaimed,
            ClaimOutcome::ConnectionError(_) => OutcomeKind::ConnectionError,
            ClaimOutcome::UnexpectedError(_) => OutcomeKind::UnexpectedError,
            ClaimOutcome::NoWalletConfigured => OutcomeKind::NoWalletConfigured,
        }
    }

    /// One-line human summary, used by the manual trigger response and the
    /// dashboard.
    pub fn describe(&self) -> String {
        match self {
            ClaimOutcome::Success(reward) => match (&reward.amount, &reward.transaction_hash) {
                (Some(amount), Some(tx)) => format!("claimed {} MON (tx {})", amount, tx),
                (Some(amount), None) => format!("claimed {} MON", amount),
                _ => "claim succeeded".to_string(),
            },
            ClaimOutcome::AlreadyClaimed(cooldown) => match cooldown.remaining_secs {
                Some(secs) => format!("already claimed, {} remaining", format_wait(secs)),
                None => "already claimed recently".to_string(),
            },
            ClaimOutcome::ConnectionError(failure) => failure.to_string(),
            ClaimOutcome::UnexpectedError(detail) => detail.message.clone(),
            ClaimOutcome::NoWalletConfigured => "no wallet address configured".to_string(),
        }
    }
}

/// Faucet response body. All fields are optional and polymorphic (`Value`)
/// where the faucet has been seen returning either strings or numbers, so a
/// shape mismatch on one field can never fail the whole parse.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaucetReply {
    #[serde(default)]
    success: Option<Value>,
    #[serde(default, rename = "type")]
    kind: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    amount_received: Option<Value>,
    #[serde(default)]
    transaction_hash: Option<Value>,
    #[serde(default)]
    tier: Option<Value>,
    #[serde(default)]
    morkie_balance: Option<Value>,
    #[serde(default)]
    next_claim_available: Option<Value>,
    #[serde(default)]
    remaining_time: Option<Value>,
}

/// Classify a completed HTTP exchange. Total over every (status, body) pair.
pub fn classify_response(status: u16, body: &str) -> ClaimOutcome {
    if body.trim().is_empty() {
        return ClaimOutcome::UnexpectedError(UnexpectedDetail {
            message: "empty response".to_string(),
            raw_excerpt: None,
        });
    }

    let reply: FaucetReply = match serde_json::from_str(body) {
        Ok(reply) => reply,
        Err(err) => {
            return ClaimOutcome::UnexpectedError(UnexpectedDetail {
                message: format!("invalid format: {}", err),
                raw_excerpt: Some(excerpt(body)),
            });
        }
    };

    // A 429 must never take this branch: success is only honored on 200.
    if status == 200 && reply.success.as_ref().is_some_and(is_truthy) {
        return ClaimOutcome::Success(ClaimReward {
            amount: as_display(reply.amount_received.as_ref()),
            transaction_hash: as_display(reply.transaction_hash.as_ref()),
            tier: as_display(reply.tier.as_ref()),
            morkie_balance: as_display(reply.morkie_balance.as_ref()),
            next_claim_available: as_claim_time(reply.next_claim_available.as_ref()),
        });
    }

    if status == 429 || reply.kind.as_ref().and_then(Value::as_str) == Some("wallet_limit") {
        return ClaimOutcome::AlreadyClaimed(CooldownInfo {
            message: as_display(reply.message.as_ref()),
            remaining_secs: as_secs(reply.remaining_time.as_ref()),
            next_claim_available: as_claim_time(reply.next_claim_available.as_ref()),
        });
    }

    ClaimOutcome::UnexpectedError(UnexpectedDetail {
        message: as_display(reply.message.as_ref()).unwrap_or_else(|| "unknown error".to_string()),
        raw_excerpt: None,
    })
}

/// JSON truthiness, matching dynamic-language semantics: `false`, `null`,
/// `0`, `""`, `[]` and `{}` are falsy, everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Coerce a JSON value to a display string. Strings are taken as-is,
/// numbers/bools are formatted, null becomes absent.
fn as_display(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Read a seconds count that may arrive as a number or a numeric string.
fn as_secs(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Read a millisecond epoch timestamp (number or numeric string) into an
/// absolute time.
fn as_claim_time(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let millis = match value? {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    DateTime::from_timestamp_millis(millis)
}

/// First [`RAW_EXCERPT_CHARS`] characters of a body, char-boundary safe.
fn excerpt(body: &str) -> String {
    body.chars().take(RAW_EXCERPT_CHARS).collect()
}

/// `3660` -> `"1h 1m"`, same formatting the faucet dashboard uses.
pub fn format_wait(secs: u64) -> String {
    format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(status: u16, body: &str) -> OutcomeKind {
        classify_response(status, body).kind()
    }

    #[test]
    fn test_success_with_full_payload() {
        let body = r#"{
            "success": true,
            "amountReceived": "0.1",
            "transactionHash": "0xabc",
            "tier": 2,
            "morkieBalance": "15",
            "nextClaimAvailable": 1735689600000
        }"#;

        let outcome = classify_response(200, body);
        let ClaimOutcome::Success(reward) = outcome else {
            panic!("expected Success, got {:?}", outcome);
        };
        assert_eq!(reward.amount.as_deref(), Some("0.1"));
        assert_eq!(reward.transaction_hash.as_deref(), Some("0xabc"));
        assert_eq!(reward.tier.as_deref(), Some("2"));
        assert_eq!(
            reward.next_claim_available,
            DateTime::from_timestamp_millis(1735689600000)
        );
    }

    #[test]
    fn test_success_requires_status_200() {
        // 429 with a success-shaped body must still classify as the limit.
        let body = r#"{"success": true, "type": "wallet_limit"}"#;
        assert_eq!(kind_of(429, body), OutcomeKind::AlreadyClaimed);
    }

    #[test]
    fn test_success_with_sparse_payload() {
        let outcome = classify_response(200, r#"{"success": true}"#);
        let ClaimOutcome::Success(reward) = outcome else {
            panic!("expected Success");
        };
        assert_eq!(reward, ClaimReward::default());
    }

    #[test]
    fn test_falsy_success_is_not_a_claim() {
        assert_eq!(
            kind_of(200, r#"{"success": false}"#),
            OutcomeKind::UnexpectedError
        );
        assert_eq!(kind_of(200, r#"{"success": 0}"#), OutcomeKind::UnexpectedError);
        assert_eq!(
            kind_of(200, r#"{"success": ""}"#),
            OutcomeKind::UnexpectedError
        );
        // Truthy non-bool values count, like the faucet's JS backend treats
        // them.
        assert_eq!(kind_of(200, r#"{"success": 1}"#), OutcomeKind::Success);
        assert_eq!(kind_of(200, r#"{"success": "yes"}"#), OutcomeKind::Success);
    }

    #[test]
    fn test_wallet_limit_by_status() {
        let body = r#"{"message": "Wallet has already claimed", "remainingTime": 3600}"#;
        let outcome = classify_response(429, body);
        let ClaimOutcome::AlreadyClaimed(cooldown) = outcome else {
            panic!("expected AlreadyClaimed");
        };
        assert_eq!(cooldown.remaining_secs, Some(3600));
        assert_eq!(cooldown.message.as_deref(), Some("Wallet has already claimed"));
    }

    #[test]
    fn test_wallet_limit_by_type_field_on_200() {
        let body = r#"{"type": "wallet_limit", "remainingTime": "7200"}"#;
        let outcome = classify_response(200, body);
        let ClaimOutcome::AlreadyClaimed(cooldown) = outcome else {
            panic!("expected AlreadyClaimed");
        };
        assert_eq!(cooldown.remaining_secs, Some(7200));
    }

    #[test]
    fn test_empty_body() {
        let outcome = classify_response(200, "   \n");
        let ClaimOutcome::UnexpectedError(detail) = outcome else {
            panic!("expected UnexpectedError");
        };
        assert_eq!(detail.message, "empty response");
        assert!(detail.raw_excerpt.is_none());
    }

    #[test]
    fn test_non_json_body_keeps_bounded_excerpt() {
        let body = format!("<html>502 Bad Gateway</html>{}", "x".repeat(600));
        let outcome = classify_response(200, &body);
        let ClaimOutcome::UnexpectedError(detail) = outcome else {
            panic!("expected UnexpectedError");
        };
        assert!(detail.message.starts_with("invalid format"));
        let excerpt = detail.raw_excerpt.expect("excerpt should be kept");
        assert_eq!(excerpt.chars().count(), 500);
        assert!(excerpt.starts_with("<html>502"));
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let body: String = "日本語テスト".repeat(100);
        let outcome = classify_response(200, &body);
        let ClaimOutcome::UnexpectedError(detail) = outcome else {
            panic!("expected UnexpectedError");
        };
        assert_eq!(detail.raw_excerpt.unwrap().chars().count(), 500);
    }

    #[test]
    fn test_non_object_json_is_invalid_format() {
        assert_eq!(kind_of(200, "[1, 2, 3]"), OutcomeKind::UnexpectedError);
        assert_eq!(kind_of(200, "\"ok\""), OutcomeKind::UnexpectedError);
    }

    #[test]
    fn test_fallback_carries_server_message() {
        let outcome = classify_response(500, r#"{"message": "internal error"}"#);
        let ClaimOutcome::UnexpectedError(detail) = outcome else {
            panic!("expected UnexpectedError");
        };
        assert_eq!(detail.message, "internal error");
    }

    #[test]
    fn test_fallback_without_message() {
        let outcome = classify_response(503, "{}");
        let ClaimOutcome::UnexpectedError(detail) = outcome else {
            panic!("expected UnexpectedError");
        };
        assert_eq!(detail.message, "unknown error");
    }

    #[test]
    fn test_totality_over_status_space() {
        // Exactly one tag for every status with both shapes of body.
        for status in [100, 200, 201, 301, 400, 401, 403, 404, 429, 500, 502, 503] {
            let _ = classify_response(status, r#"{"success": true}"#).kind();
            let _ = classify_response(status, "not json").kind();
        }
    }

    #[test]
    fn test_format_wait() {
        assert_eq!(format_wait(0), "0h 0m");
        assert_eq!(format_wait(59), "0h 0m");
        assert_eq!(format_wait(3600), "1h 0m");
        assert_eq!(format_wait(3660), "1h 1m");
        assert_eq!(format_wait(4 * 3600 + 30 * 60), "4h 30m");
    }
}
