//! Unsubscribe token encoding and decoding.
//!
//! The token is the subscriber's email address, base64url-encoded without
//! padding so it survives a query string untouched. There is nothing
//! secret about it; it exists so mail clients do not mangle the address.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::LoyaltyError;

/// Encode an email address into an unsubscribe token.
pub fn encode_unsubscribe_token(email: &str) -> String {
    URL_SAFE_NO_PAD.encode(email.as_bytes())
}

/// Decode and validate an unsubscribe token back into an email address.
///
/// Rejects tokens that are not valid base64url, not UTF-8, or do not look
/// like an email address (must contain `@` with a non-empty local part
/// and domain).
pub fn decode_unsubscribe_token(token: &str) -> Result<String, LoyaltyError> {
    if token.is_empty() {
        return Err(LoyaltyError::TokenInvalid("empty token".into()));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(token.as_bytes())
        .map_err(|e| LoyaltyError::TokenInvalid(format!("not base64url: {e}")))?;

    let email = String::from_utf8(bytes)
        .map_err(|_| LoyaltyError::TokenInvalid("not valid UTF-8".into()))?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(LoyaltyError::TokenInvalid(
            "decoded value is not an email address".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let token = encode_unsubscribe_token("user@example.com");
        let email = decode_unsubscribe_token(&token).unwrap();
        assert_eq!(email, "user@example.com");
    }

    #[test]
    fn rejects_non_email_payload() {
        let token = encode_unsubscribe_token("not-an-email");
        assert!(decode_unsubscribe_token(&token).is_err());
    }

    #[test]
    fn rejects_missing_local_part_or_domain() {
        assert!(decode_unsubscribe_token(&encode_unsubscribe_token("@example.com")).is_err());
        assert!(decode_unsubscribe_token(&encode_unsubscribe_token("user@")).is_err());
    }

    #[test]
    fn rejects_garbage_base64() {
        assert!(decode_unsubscribe_token("%%%not-base64%%%").is_err());
        assert!(decode_unsubscribe_token("").is_err());
    }
}
