//! Segment codec: JSON text carried as unpadded URL-safe base64

use crate::error::DecodeError;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Encode bytes as base64url without padding (RFC 7515)
#[inline]
pub fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded base64url (RFC 7515)
#[inline]
pub fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

/// Serialize a JSON value compactly and encode it as a token segment.
///
/// Object keys keep their insertion order.
#[must_use]
pub fn encode(value: &Value) -> String {
    base64_url_encode(value.to_string().as_bytes())
}

/// Decode a token segment into whatever JSON document it carries.
///
/// # Errors
/// Returns `DecodeError` if the segment is not base64url or not JSON
pub fn decode(segment: &str) -> Result<Value, DecodeError> {
    decode_as(segment)
}

/// Decode a token segment into a typed value.
///
/// # Errors
/// Returns `DecodeError` if the segment is not base64url or the JSON does not
/// fit `T`
pub fn decode_as<T: DeserializeOwned>(segment: &str) -> Result<T, DecodeError> {
    let bytes = base64_url_decode(segment)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Header;
    use serde_json::json;

    #[test]
    fn test_default_header_segment() {
        let segment = encode(&Header::default().to_value());
        assert_eq!(segment, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    }

    #[test]
    fn test_encode_uses_url_safe_alphabet_without_padding() {
        // standard alphabet: "Ij8/PiI="
        let segment = encode(&json!("??>"));
        assert_eq!(segment, "Ij8_PiI");
        assert_eq!(decode(&segment).expect("segment should decode"), json!("??>"));
    }

    #[test]
    fn test_encode_keeps_insertion_order() {
        let value = json!({ "z": 1, "a": 2 });
        let bytes = base64_url_decode(&encode(&value)).expect("segment should decode");
        assert_eq!(bytes, br#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(matches!(decode("not*base64"), Err(DecodeError::Base64(_))));
        assert!(matches!(decode("e30="), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let segment = base64_url_encode(b"{not json");
        assert!(matches!(decode(&segment), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_decode_accepts_any_json_document() {
        let segment = base64_url_encode(b"[1,\"two\",null]");
        assert_eq!(
            decode(&segment).expect("segment should decode"),
            json!([1, "two", null])
        );
    }

    #[test]
    fn test_decode_as_typed_header() {
        let header: Header = decode_as("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9")
            .expect("header should decode");
        assert_eq!(header, Header::default());
    }
}
