//! Decode JWT payloads and report expiry.
//!
//! Nothing here verifies a signature. The payload of a token is decoded so a
//! client can decide whether a stored token is still worth sending, how long it
//! has left, and what it claims. Every query is total: a malformed token yields
//! `None`, an expiry of `0`, or "expired" instead of an error.
//!
//! ```ignore
//! use jwt_inspect::{DEFAULT_SKEW_SECONDS, format_remaining, is_expired, millis_until_expiry};
//!
//! if is_expired(&token, DEFAULT_SKEW_SECONDS) {
//!     return redirect_to_login();
//! }
//! println!("session ends in {}", format_remaining(millis_until_expiry(&token)));
//! ```
//!
//! [`ExpiryStatus`] and [`payload::decode`] keep apart what the sentinel
//! functions collapse: a token that cannot be decoded versus one without `exp`.

mod error;

// Internal modules
pub(crate) mod claims;
pub(crate) mod clock;
pub(crate) mod expiry;
pub(crate) mod inspector;
pub(crate) mod limits;
pub mod payload;
pub(crate) mod utils;

// Public Interface
pub use claims::StandardClaims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use expiry::{
    ExpiryStatus, format_remaining, get_expiry_millis, is_expired, millis_until_expiry,
};
pub use inspector::TokenInspector;
pub use limits::DEFAULT_SKEW_SECONDS;
pub use payload::{Payload, decode_payload};
