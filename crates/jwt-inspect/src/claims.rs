//! Registered claims
//!
//! Typed access to the registered claim names of RFC 7519 Section 4.1. Values
//! of the wrong JSON type read as absent.

use crate::payload::Payload;
use miniserde::json::Value;

/// The `StandardClaims` trait defines the standard JWT claims.
pub trait StandardClaims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    fn issuer(&self) -> Option<&str>;
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    fn subject(&self) -> Option<&str>;
    /// Audience (aud) - a single string or an array of strings
    fn audience(&self) -> Vec<&str>;
    /// Expiration Time (exp) - identifies the expiration time (seconds since Unix epoch)
    fn expiration(&self) -> Option<i64>;
    /// Not Before (nbf) - identifies the time before which the JWT MUST NOT be accepted
    fn not_before(&self) -> Option<i64>;
    /// Issued At (iat) - identifies the time at which the JWT was issued
    fn issued_at(&self) -> Option<i64>;
    /// JWT ID (jti) - provides a unique identifier for the JWT
    fn jwt_id(&self) -> Option<&str>;
}

impl StandardClaims for Payload {
    fn issuer(&self) -> Option<&str> {
        self.string("iss")
    }

    fn subject(&self) -> Option<&str> {
        self.string("sub")
    }

    fn audience(&self) -> Vec<&str> {
        match self.get("aud") {
            Some(Value::String(aud)) => vec![aud.as_str()],
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(|v| match v {
                    Value::String(aud) => Some(aud.as_str()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn expiration(&self) -> Option<i64> {
        self.integer("exp")
    }

    fn not_before(&self) -> Option<i64> {
        self.integer("nbf")
    }

    fn issued_at(&self) -> Option<i64> {
        self.integer("iat")
    }

    fn jwt_id(&self) -> Option<&str> {
        self.string("jti")
    }
}
