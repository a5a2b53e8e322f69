//! Base64URL segment decoding
//!
//! Token segments use the URL-safe alphabet without padding. Decoding here is
//! deliberately forgiving: the segment is translated to the standard alphabet
//! and decoded with optional padding, so segments carrying `+`, `/` or `=` are
//! accepted too, the same way a browser `atob` would take them.

use crate::error::{Error, Result};
use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Map the URL-safe alphabet onto the standard one, dropping ASCII whitespace
pub(crate) fn to_standard_alphabet(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect()
}

/// Decode Base64URL string to bytes with maximum size limit
pub(crate) fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    let result = FORGIVING
        .decode(to_standard_alphabet(input))
        .map_err(|e| Error::FormatInvalidBase64(e.to_string()))?;

    if result.len() > max_size {
        return Err(Error::PayloadTooLarge {
            size: result.len(),
            max: max_size,
        });
    }

    Ok(result)
}

/// Decode Base64URL string to UTF-8 string with size limit
pub(crate) fn decode_string(input: &str, max_size: usize) -> Result<String> {
    decode_bytes(input, max_size).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::FormatInvalidUtf8(e.to_string()))
    })
}
