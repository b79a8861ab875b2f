//! Reading session claims out of the API's JWT access tokens.
//!
//! The API signs its tokens; the client never verifies the signature. It only
//! reads the payload to learn who is logged in and with which role, and the
//! server remains the authority on every request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use eventhub_core::session::{SessionClaims, SessionError, TokenDecoder};

/// Decodes the claims segment of a JWT without checking its signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtClaimsDecoder;

impl TokenDecoder for JwtClaimsDecoder {
    fn decode(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut segments = token.trim().split('.');
        let payload = match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
            _ => {
                return Err(SessionError::InvalidToken(
                    "expected three dot-separated segments".to_string(),
                ))
            }
        };

        // Some issuers keep the padding.
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| SessionError::InvalidToken(e.to_string()))?;

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| SessionError::InvalidToken(e.to_string()))?;
        if value.get("sub").is_none() {
            return Err(SessionError::MissingClaim("sub".to_string()));
        }

        serde_json::from_value(value).map_err(|e| SessionError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_core::models::Role;

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
            r#"{"sub":"00000000-0000-0000-0000-000000000009","email":"kim@example.com","role":"admin","exp":1900000000}"#,
        );

        let claims = JwtClaimsDecoder.decode(&token).unwrap();

        assert_eq!(claims.email.as_deref(), Some("kim@example.com"));
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp, Some(1_900_000_000));
    }

    #[test]
    fn test_decode_defaults_role() {
        let token = token_with(r#"{"sub":"00000000-0000-0000-0000-000000000009"}"#);

        let claims = JwtClaimsDecoder.decode(&token).unwrap();

        assert_eq!(claims.role, Role::User);
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert!(matches!(
            JwtClaimsDecoder.decode("not-a-jwt"),
            Err(SessionError::InvalidToken(_))
        ));
        assert!(matches!(
            JwtClaimsDecoder.decode("a.b.c.d"),
            Err(SessionError::InvalidToken(_))
        ));
        assert!(matches!(
            JwtClaimsDecoder.decode("a.%%%.c"),
            Err(SessionError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_decode_requires_subject() {
        let token = token_with(r#"{"email":"kim@example.com"}"#);

        assert_eq!(
            JwtClaimsDecoder.decode(&token),
            Err(SessionError::MissingClaim("sub".to_string()))
        );
    }
}
