use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::expiry::{
    ExpiryStatus, expired_within, expiry_millis_of, format_remaining, remaining_millis,
};
use crate::limits::DEFAULT_SKEW_SECONDS;
use crate::payload::{self, Payload};
use std::fmt;
use std::sync::Arc;

/// Token inspector
///
/// Holds the expiry skew and the clock, so callers configure them once and
/// reuse the inspector for every token. All queries are total: a token that
/// cannot be decoded yields `None`, `0` or "expired", never an error.
///
/// ```ignore
/// let inspector = TokenInspector::new().skew(30).build();
/// if inspector.is_expired(&token) {
///     redirect_to_login();
/// }
/// ```
#[derive(Clone)]
pub struct TokenInspector {
    config_skew_seconds: u64,
    config_clock: Arc<dyn Clock>,
}

impl TokenInspector {
    /// Create an inspector with the default skew and the system clock
    pub fn new() -> Self {
        Self {
            config_skew_seconds: DEFAULT_SKEW_SECONDS,
            config_clock: Arc::new(SystemClock),
        }
    }

    /// Configure the expiry safety margin in seconds
    pub fn skew(&mut self, seconds: u64) -> &mut Self {
        self.config_skew_seconds = seconds;
        self
    }

    /// Configure the time source
    pub fn clock<C>(&mut self, clock: C) -> &mut Self
    where
        C: Clock + 'static,
    {
        self.config_clock = Arc::new(clock);
        self
    }

    pub fn build(&mut self) -> Self {
        self.clone()
    }

    pub fn skew_seconds(&self) -> u64 {
        self.config_skew_seconds
    }

    pub fn now_millis(&self) -> i64 {
        self.config_clock.now_millis()
    }
}

impl TokenInspector {
    /// Decode the payload, keeping the reason on failure
    pub fn decode(&self, token: &str) -> Result<Payload> {
        payload::decode(token)
    }

    /// Decode the payload, or `None`
    pub fn decode_payload(&self, token: &str) -> Option<Payload> {
        payload::decode_payload(token)
    }

    /// Expiry instant in Unix epoch milliseconds, or `0` if unknown
    pub fn expiry_millis(&self, token: &str) -> i64 {
        expiry_millis_of(self.decode_payload(token).as_ref())
    }

    /// Milliseconds left on this inspector's clock; `-now` if unknown
    pub fn millis_until_expiry(&self, token: &str) -> i64 {
        let expiry = self.expiry_millis(token);
        let now = self.now_millis();
        tracing::trace!(expiry, now, "computing remaining token lifetime");
        remaining_millis(expiry, now)
    }

    /// Whether no more than the configured skew is left before expiry
    pub fn is_expired(&self, token: &str) -> bool {
        expired_within(self.millis_until_expiry(token), self.config_skew_seconds)
    }

    /// Remaining lifetime rendered by [`format_remaining`]
    pub fn remaining(&self, token: &str) -> String {
        format_remaining(self.millis_until_expiry(token))
    }

    /// Classify the token without collapsing decode failures into "expired"
    pub fn status(&self, token: &str) -> ExpiryStatus {
        let status = ExpiryStatus::evaluate(token, self.now_millis(), self.config_skew_seconds);
        tracing::trace!(?status, "classified token expiry");
        status
    }
}

impl Default for TokenInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TokenInspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenInspector")
            .field("skew_seconds", &self.config_skew_seconds)
            .finish_non_exhaustive()
    }
}
