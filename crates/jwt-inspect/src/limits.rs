//! Size limit constants for input validation

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for the decoded payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Default expiry safety margin in seconds
///
/// A token counts as expired once no more than this much time is left.
pub const DEFAULT_SKEW_SECONDS: u64 = 5;

/// Milliseconds per second, for claim conversions
pub(crate) const MILLIS_PER_SECOND: i64 = 1000;
