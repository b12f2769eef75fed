//! Token Verifier
//!
//! Wraps `jsonwebtoken` behind the contract the middleware needs:
//! `verify(token) -> Claims | {Expired, Invalid}`. The verifier is built once
//! at startup from the process-wide signing secret and is immutable for the
//! lifetime of the process.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::JwtConfig;

/// Claims embedded in a portal bearer token
///
/// `id` and `role` are set by the external issuance process; `role` is carried
/// as an opaque string and never drives authorization decisions by itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id (UUID string)
    pub id: String,
    /// Role name embedded at issuance time
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Verification failure, collapsed to the two cases the pipeline distinguishes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("token verification failed")]
    Invalid,
}

/// HS256 token verifier holding the pre-built decoding key
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier from the JWT configuration
    ///
    /// The algorithm is pinned to HS256 so tokens signed with anything else
    /// are rejected outright.
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_secs;

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.expose().as_bytes()),
            validation,
        }
    }

    /// Verify signature and expiry, returning the decoded claims
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` when verification fails specifically due
    /// to expiry, `TokenError::Invalid` for every other failure (bad
    /// signature, malformed token, wrong algorithm, missing claims).
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::driven_adapters::config::SecretString;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "unit-test-secret-key-min-32-characters!";

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(&JwtConfig {
            secret: SecretString::new(SECRET),
            leeway_secs: 0,
        })
    }

    fn claims_with_exp(exp: i64) -> Claims {
        Claims {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            role: "patient".to_string(),
            iat: Utc::now().timestamp(),
            exp,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_round_trips_claims() {
        let claims = claims_with_exp(Utc::now().timestamp() + 3600);
        let token = sign(&claims, SECRET);

        let decoded = verifier().verify(&token).unwrap();
        assert_eq!(decoded.id, claims.id);
        assert_eq!(decoded.role, claims.role);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn test_expired_token_is_distinguished() {
        let claims = claims_with_exp(Utc::now().timestamp() - 3600);
        let token = sign(&claims, SECRET);

        assert!(matches!(
            verifier().verify(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let claims = claims_with_exp(Utc::now().timestamp() + 3600);
        let token = sign(&claims, "a-different-secret-key-32-characters!!");

        assert!(matches!(
            verifier().verify(&token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert!(matches!(
            verifier().verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_wrong_algorithm_is_invalid() {
        let claims = claims_with_exp(Utc::now().timestamp() + 3600);
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verifier().verify(&token),
            Err(TokenError::Invalid)
        ));
    }
}
