//! JWT claims, issuance, and verification.

use chrono::{Duration, Utc};
use ember_core::credentials::{CredentialPair, TokenKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Username must not be empty")]
    EmptyUsername,
    #[error("Expected {} token, got {}", expected.as_str(), actual.as_str())]
    WrongKind {
        expected: TokenKind,
        actual: TokenKind,
    },
}

/// Access token lifetime.
pub const ACCESS_TTL_MINUTES: i64 = 10;
/// Refresh token lifetime.
pub const REFRESH_TTL_DAYS: i64 = 30;

/// Claims carried by every Ember token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
    pub kind: TokenKind,
}

impl Claims {
    fn new(username: &str, kind: TokenKind, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: username.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
            kind,
        }
    }
}

/// Mints HS256-signed access/refresh token pairs.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Issue a credential pair bound to `username`.
    pub fn issue(&self, username: &str) -> Result<CredentialPair, AuthError> {
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }

        let access = self.sign(Claims::new(
            username,
            TokenKind::Access,
            Duration::minutes(ACCESS_TTL_MINUTES),
        ))?;
        let refresh = self.sign(Claims::new(
            username,
            TokenKind::Refresh,
            Duration::days(REFRESH_TTL_DAYS),
        ))?;

        Ok(CredentialPair {
            access_token: access,
            refresh_token: refresh,
        })
    }

    fn sign(&self, claims: Claims) -> Result<String, AuthError> {
        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }
}

/// Validates token signature, expiry, and kind.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify a token and check that it carries the expected kind.
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        if data.claims.kind != kind {
            return Err(AuthError::WrongKind {
                expected: kind,
                actual: data.claims.kind,
            });
        }
        Ok(data.claims)
    }
}
