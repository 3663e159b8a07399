//! Hex secret validation, decoding and generation

use crate::error::{JwtError, JwtResult};
use rand::Rng;
use zeroize::Zeroizing;

/// Secret size produced by [`generate_secret`]: 256 bits, 64 hex characters
pub const RECOMMENDED_SECRET_BYTES: usize = 32;

/// Check that a secret is one or more hex digits, in either case.
///
/// Length is not checked; keys longer than the SHA-256 block are hashed down
/// by HMAC as usual.
///
/// # Errors
/// Returns `JwtError::InvalidSecret` for an empty secret or any non-hex character
pub fn validate_secret(secret_hex: &str) -> JwtResult<()> {
    if !secret_hex.is_empty() && secret_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        tracing::warn!(len = secret_hex.len(), "rejected malformed HMAC secret");
        Err(JwtError::InvalidSecret)
    }
}

/// Validate a hex secret and decode it into HMAC key bytes.
///
/// An odd number of digits is read as if led by a `0`, so `"abc"` keys as
/// `[0x0a, 0xbc]` and every digit contributes to the key.
pub(crate) fn secret_bytes(secret_hex: &str) -> JwtResult<Zeroizing<Vec<u8>>> {
    validate_secret(secret_hex)?;
    let decoded = if secret_hex.len() % 2 == 0 {
        hex::decode(secret_hex)
    } else {
        hex::decode(Zeroizing::new(format!("0{secret_hex}")).as_str())
    };
    decoded.map(Zeroizing::new).map_err(|_| JwtError::InvalidSecret)
}

/// Generate a random secret of [`RECOMMENDED_SECRET_BYTES`] as lowercase hex
#[must_use]
pub fn generate_secret() -> String {
    generate_secret_with_len(RECOMMENDED_SECRET_BYTES)
}

/// Generate a random secret of `len` bytes (at least one) as lowercase hex
#[must_use]
pub fn generate_secret_with_len(len: usize) -> String {
    let mut bytes = Zeroizing::new(vec![0u8; len.max(1)]);
    rand::rng().fill(bytes.as_mut_slice());
    hex::encode(bytes.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_hex_of_any_case_and_length() {
        let long = "f".repeat(300);
        for secret in ["a", "ABC123", "abc123", "0", "deadBEEF", long.as_str()] {
            assert_eq!(validate_secret(secret), Ok(()), "{secret}");
        }
    }

    #[test]
    fn test_validate_rejects_empty_and_non_hex() {
        for secret in ["", "xyz", "abc123g", " abc", "abc\n", "0x12", "ab-cd", "é"] {
            assert_eq!(validate_secret(secret), Err(JwtError::InvalidSecret), "{secret:?}");
        }
    }

    #[test]
    fn test_secret_bytes_decodes_pairs() {
        let bytes = secret_bytes("ABC123").expect("secret should decode");
        assert_eq!(bytes.as_slice(), &[0xab, 0xc1, 0x23]);

        let lower = secret_bytes("abc123").expect("secret should decode");
        assert_eq!(lower.as_slice(), bytes.as_slice());
    }

    #[test]
    fn test_secret_bytes_pads_odd_length() {
        let bytes = secret_bytes("abc").expect("secret should decode");
        assert_eq!(bytes.as_slice(), &[0x0a, 0xbc]);

        let single = secret_bytes("F").expect("secret should decode");
        assert_eq!(single.as_slice(), &[0x0f]);

        // appending a digit always changes the key
        let longer = secret_bytes("ABC1234").expect("secret should decode");
        assert_eq!(longer.as_slice(), &[0x0a, 0xbc, 0x12, 0x34]);
    }

    #[test]
    fn test_generate_secret() {
        let a = generate_secret();
        let b = generate_secret();

        assert_eq!(a.len(), RECOMMENDED_SECRET_BYTES * 2);
        assert_ne!(a, b);
        assert_eq!(validate_secret(&a), Ok(()));
        assert!(a.bytes().all(|c| !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_secret_with_len() {
        assert_eq!(generate_secret_with_len(64).len(), 128);
        assert_eq!(generate_secret_with_len(0).len(), 2);
    }
}
