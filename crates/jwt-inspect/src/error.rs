//! Errors for jwt-inspect
//!
//! Every variant is a flavour of "the payload could not be decoded". The public
//! sentinel functions collapse them all to `None` or `0`; the result-typed
//! decoder keeps them apart so callers and tests can tell them apart.

use thiserror::Error;

/// Payload decode failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token format: expected a payload segment after the first '.'")]
    FormatInvalid,

    #[error("Base64 decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("Payload is not valid UTF-8: {0}")]
    FormatInvalidUtf8(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    // ============================================================================
    // Payload Errors
    // ============================================================================
    #[error("Payload is JSON but not an object")]
    PayloadNotObject,

    #[error("Decoded payload too large: {size} bytes (maximum: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },
}

/// Result type alias for jwt-inspect operations
pub type Result<T> = std::result::Result<T, Error>;
