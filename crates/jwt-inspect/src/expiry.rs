//! Expiry arithmetic over the `exp` claim
//!
//! The free functions follow a sentinel contract: a token that cannot be
//! decoded and a token without an `exp` claim both have an expiry of `0`, so
//! both read as long expired. [`ExpiryStatus`] keeps those cases apart.

use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::limits::MILLIS_PER_SECOND;
use crate::payload::{self, Payload, decode_payload};

/// Expiry instant of a token in Unix epoch milliseconds, or `0` if unknown
pub fn get_expiry_millis(token: &str) -> i64 {
    expiry_millis_of(decode_payload(token).as_ref())
}

/// Milliseconds left until the token expires; negative once it has
///
/// With no known expiry this is `-now`.
pub fn millis_until_expiry(token: &str) -> i64 {
    remaining_millis(get_expiry_millis(token), SystemClock.now_millis())
}

/// Whether no more than `skew_seconds` are left before expiry
///
/// Tokens without a known expiry are always expired.
/// [`DEFAULT_SKEW_SECONDS`](crate::DEFAULT_SKEW_SECONDS) is the usual margin.
pub fn is_expired(token: &str, skew_seconds: u64) -> bool {
    expired_within(millis_until_expiry(token), skew_seconds)
}

/// Render a remaining duration as `"{minutes}m {seconds}s"`, or `"expired"`
///
/// Sub-second remainders are dropped and nothing is zero-padded.
pub fn format_remaining(millis: i64) -> String {
    if millis <= 0 {
        return "expired".to_string();
    }

    let total_seconds = millis / MILLIS_PER_SECOND;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}m {seconds}s")
}

pub(crate) fn expiry_millis_of(payload: Option<&Payload>) -> i64 {
    payload
        .and_then(|p| p.seconds_as_millis("exp"))
        .unwrap_or(0)
}

pub(crate) fn remaining_millis(expiry_millis: i64, now_millis: i64) -> i64 {
    expiry_millis.saturating_sub(now_millis)
}

pub(crate) fn expired_within(remaining_millis: i64, skew_seconds: u64) -> bool {
    let skew_millis = i64::try_from(skew_seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(MILLIS_PER_SECOND);
    remaining_millis <= skew_millis
}

/// Expiry classification that does not collapse failure into "expired"
#[derive(Debug, Clone, PartialEq)]
pub enum ExpiryStatus {
    /// The payload could not be decoded
    Undecodable(Error),
    /// The payload decoded but has no numeric `exp` claim
    NoExpiry,
    /// Within the skew margin of, or past, the expiry instant
    Expired { expires_at: i64 },
    /// More than the skew margin left
    Active { expires_at: i64, remaining: i64 },
}

impl ExpiryStatus {
    /// Classify a token against `now_millis` with the given skew
    pub fn evaluate(token: &str, now_millis: i64, skew_seconds: u64) -> Self {
        let payload = match payload::decode(token) {
            Ok(payload) => payload,
            Err(e) => return Self::Undecodable(e),
        };

        let Some(expires_at) = payload.seconds_as_millis("exp") else {
            return Self::NoExpiry;
        };

        let remaining = remaining_millis(expires_at, now_millis);
        if expired_within(remaining, skew_seconds) {
            Self::Expired { expires_at }
        } else {
            Self::Active {
                expires_at,
                remaining,
            }
        }
    }

    /// Agrees with [`is_expired`]: anything but `Active` counts as expired
    pub fn is_expired(&self) -> bool {
        !matches!(self, Self::Active { .. })
    }

    /// Whether an expiry instant was found at all
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Expired { .. } | Self::Active { .. })
    }

    /// Expiry instant in Unix epoch milliseconds, if known
    pub fn expires_at(&self) -> Option<i64> {
        match self {
            Self::Expired { expires_at } | Self::Active { expires_at, .. } => Some(*expires_at),
            _ => None,
        }
    }

    /// Human readable remaining time, as [`format_remaining`] renders it
    pub fn remaining_label(&self) -> String {
        match self {
            Self::Active { remaining, .. } => format_remaining(*remaining),
            _ => format_remaining(0),
        }
    }
}
