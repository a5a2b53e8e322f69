//! Token payload decoding
//!
//! A token is `header.payload.signature`. Only the payload segment is read and
//! nothing is verified: the decoded claims are untrusted data.

use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH, MILLIS_PER_SECOND};
use crate::utils::base64url;
use miniserde::json::{Number, Object, Value};

/// Decoded token payload
///
/// A string-keyed mapping of JSON values. Registered claims are read through
/// [`StandardClaims`](crate::StandardClaims); anything else through [`Payload::get`].
#[derive(Debug, Clone)]
pub struct Payload {
    claims: Object,
}

impl Payload {
    /// Look up a claim by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    /// Whether the payload carries a claim with this name
    pub fn contains_key(&self, key: &str) -> bool {
        self.claims.contains_key(key)
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate claims in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.claims.iter()
    }

    pub fn as_object(&self) -> &Object {
        &self.claims
    }

    pub fn into_object(self) -> Object {
        self.claims
    }

    /// Serialize the claims back to compact JSON
    pub fn to_json(&self) -> String {
        miniserde::json::to_string(&self.claims)
    }

    /// Integral claim value
    ///
    /// Strings, floats and out-of-range integers yield `None`; no coercion.
    pub(crate) fn integer(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(Number::I64(n)) => Some(*n),
            Value::Number(Number::U64(n)) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Seconds-valued claim scaled to milliseconds
    ///
    /// Unlike [`Payload::integer`] this accepts a finite float, as a NumericDate
    /// may carry a fraction. Floats are truncated toward zero after scaling and
    /// clamp to the `i64` range. Strings still yield `None`.
    pub(crate) fn seconds_as_millis(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(Number::F64(f)) if f.is_finite() => Some((f * 1000.0) as i64),
            _ => self
                .integer(key)
                .map(|n| n.saturating_mul(MILLIS_PER_SECOND)),
        }
    }

    /// String claim value
    pub(crate) fn string(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self {
            claims: Object::new(),
        }
    }
}

impl From<Object> for Payload {
    fn from(claims: Object) -> Self {
        Self { claims }
    }
}

/// Decode the payload segment of a token
///
/// Takes the second `.`-separated segment, decodes it as Base64URL, then as
/// UTF-8 JSON, and requires the result to be an object. Extra segments beyond
/// the payload are ignored. Valid JSON that is not an object (`42`, `[]`,
/// `null`) is rejected with [`Error::PayloadNotObject`].
pub fn decode(token: &str) -> Result<Payload> {
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(Error::TokenTooLarge {
            size: token.len(),
            max: MAX_TOKEN_LENGTH,
        });
    }

    let payload_b64 = token.split('.').nth(1).ok_or(Error::FormatInvalid)?;
    let payload_json = base64url::decode_string(payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;

    let value: Value = miniserde::json::from_str(&payload_json)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse payload: {e}")))?;

    match value {
        Value::Object(claims) => Ok(Payload { claims }),
        _ => Err(Error::PayloadNotObject),
    }
}

/// Decode the payload segment of a token, or `None` if anything is wrong with it
pub fn decode_payload(token: &str) -> Option<Payload> {
    match decode(token) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::debug!(error = %e, "token payload decode failed");
            None
        }
    }
}
