//! Edge case tests for payload decoding
//!
//! Malformed input of every kind must come back as `None` and an expiry of `0`,
//! never as a panic.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use jwt_inspect::*;

fn token_with_payload(payload: &str) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload),
        URL_SAFE_NO_PAD.encode("signature")
    )
}

// ============================================================================
// Token Format Edge Cases
// ============================================================================

#[test]
fn test_empty_token() {
    assert!(decode_payload("").is_none());
    assert_eq!(get_expiry_millis(""), 0);
}

#[test]
fn test_single_segment() {
    assert!(decode_payload("eyJleHAiOjF9").is_none());
    assert_eq!(get_expiry_millis("eyJleHAiOjF9"), 0);
}

#[test]
fn test_single_dot() {
    assert!(decode_payload(".").is_none());
}

#[test]
fn test_whitespace_only() {
    assert!(decode_payload("   ").is_none());
}

#[test]
fn test_extra_segments_are_ignored() {
    let token = format!("{}.extra.parts", token_with_payload(r#"{"exp":12}"#));
    assert_eq!(get_expiry_millis(&token), 12_000);
}

#[test]
fn test_payload_without_signature() {
    let token = format!("header.{}", URL_SAFE_NO_PAD.encode(r#"{"exp":12}"#));
    assert_eq!(get_expiry_millis(&token), 12_000);
}

// ============================================================================
// Encoding Edge Cases
// ============================================================================

#[test]
fn test_invalid_base64_characters() {
    assert!(decode_payload("header.@@@@.sig").is_none());
    assert!(decode_payload("header.e*J9.sig").is_none());
}

#[test]
fn test_truncated_base64() {
    // One leftover character cannot encode a byte
    let mut segment = URL_SAFE_NO_PAD.encode(r#"{"exp":1}"#);
    segment.push('A');
    assert_eq!(segment.len() % 4, 1);
    assert!(decode_payload(&format!("h.{segment}.s")).is_none());
}

#[test]
fn test_padded_payload_is_accepted() {
    let segment = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":77}"#);
    assert!(segment.ends_with("=="));
    assert_eq!(get_expiry_millis(&format!("h.{segment}.s")), 77_000);
}

#[test]
fn test_standard_alphabet_payload_is_accepted() {
    // "?>" pushes the encoding into the characters that differ between alphabets
    let json = r#"{"exp":9,"q":"??>>"}"#;
    let standard = base64::engine::general_purpose::STANDARD_NO_PAD.encode(json);
    let url_safe = URL_SAFE_NO_PAD.encode(json);
    assert_ne!(standard, url_safe);

    assert_eq!(get_expiry_millis(&format!("h.{standard}.s")), 9_000);
    assert_eq!(get_expiry_millis(&format!("h.{url_safe}.s")), 9_000);
}

#[test]
fn test_invalid_utf8_payload() {
    let segment = URL_SAFE_NO_PAD.encode([0x7b, 0xff, 0xfe, 0x7d]);
    assert!(decode_payload(&format!("h.{segment}.s")).is_none());
    assert!(matches!(
        payload::decode(&format!("h.{segment}.s")),
        Err(Error::FormatInvalidUtf8(_))
    ));
}

#[test]
fn test_multibyte_utf8_claims() {
    let payload = decode_payload(&token_with_payload(r#"{"name":"Ünïcødé ✓","exp":1}"#)).unwrap();
    assert!(matches!(
        payload.get("name"),
        Some(miniserde::json::Value::String(s)) if s == "Ünïcødé ✓"
    ));
}

// ============================================================================
// JSON Edge Cases
// ============================================================================

#[test]
fn test_invalid_json() {
    assert!(decode_payload(&token_with_payload("{not json}")).is_none());
    assert!(decode_payload(&token_with_payload(r#"{"exp":1"#)).is_none());
    assert!(decode_payload(&token_with_payload("")).is_none());
}

#[test]
fn test_json_scalars_are_not_payloads() {
    for scalar in ["1", "true", "null", r#""exp""#, "[]"] {
        let token = token_with_payload(scalar);
        assert!(decode_payload(&token).is_none(), "accepted {scalar}");
        assert_eq!(
            payload::decode(&token).unwrap_err(),
            Error::PayloadNotObject
        );
    }
}

#[test]
fn test_empty_object() {
    let payload = decode_payload(&token_with_payload("{}")).unwrap();
    assert!(payload.is_empty());
    assert_eq!(payload.expiration(), None);
}

#[test]
fn test_nested_claims_survive() {
    let payload = decode_payload(&token_with_payload(
        r#"{"exp":5,"roles":["merchant","buyer"],"profile":{"store":"green-grocer"}}"#,
    ))
    .unwrap();

    assert_eq!(payload.len(), 3);
    assert!(matches!(
        payload.get("roles"),
        Some(miniserde::json::Value::Array(roles)) if roles.len() == 2
    ));
    assert!(matches!(
        payload.get("profile"),
        Some(miniserde::json::Value::Object(profile)) if profile.contains_key("store")
    ));
}

#[test]
fn test_round_trip_exp() {
    for exp in [0_i64, 1, 1_700_000_000, 4_102_444_800] {
        let payload = decode_payload(&token_with_payload(&format!(r#"{{"exp":{exp}}}"#))).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.expiration(), Some(exp));
        assert_eq!(payload.to_json(), format!(r#"{{"exp":{exp}}}"#));
    }
}

// ============================================================================
// Size Limits
// ============================================================================

#[test]
fn test_oversized_token() {
    let filler = "x".repeat(70 * 1024);
    let token = token_with_payload(&format!(r#"{{"exp":1,"pad":"{filler}"}}"#));

    assert!(decode_payload(&token).is_none());
    assert!(matches!(
        payload::decode(&token),
        Err(Error::TokenTooLarge { .. })
    ));
}
