//! Reads the JWT payload without checking the signature.
//!
//! The claims only decide what the UI shows; the backend re-checks every call.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use contracts::system::auth::TokenClaims;

pub fn decode_claims(token: &str) -> Result<TokenClaims, String> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err("Token is not a JWT".to_string()),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| format!("Invalid token payload: {}", e))?;
    serde_json::from_slice::<TokenClaims>(&bytes).map_err(|e| format!("Invalid token claims: {}", e))
}

/// True when the token carries an `exp` in the past.
pub fn is_token_expired(claims: &TokenClaims) -> bool {
    let now_secs = (js_sys::Date::now() / 1000.0) as i64;
    claims.is_expired(now_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with(
            r#"{"sub":"17","email":"hr@example.com","name":"Priya","role":"hr","exp":1893456000}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "17");
        assert_eq!(claims.role, Role::Hr);
        assert_eq!(claims.name.as_deref(), Some("Priya"));
        assert_eq!(claims.exp, Some(1_893_456_000));
    }

    #[test]
    fn test_decode_tolerates_padding_and_missing_fields() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"1"}"#);
        let token = format!("h.{}.s", payload);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, Role::Employee);
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("a..c").is_err());
        assert!(decode_claims("a.b.c.d").is_err());
        assert!(decode_claims(&format!("h.{}.s", URL_SAFE_NO_PAD.encode("[]"))).is_err());
    }
}
