//! Session token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying the caller's email as the identity claim.
//! Expiry is the only deactivation mechanism; there is no revocation list.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

const MAX_TTL_MINUTES: u64 = 365 * 24 * 60;

/// Decoded payload of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the caller, an email address.
    pub email: String,
    /// Issued-at, seconds since the epoch.
    pub iat: usize,
    /// Expiry, seconds since the epoch.
    pub exp: usize,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing secret is not configured")]
    MissingSecret,
    #[error("failed to sign token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
    #[error("invalid or expired token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// A freshly signed token together with its expiry instant.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies session tokens with a shared secret.
///
/// Cheap to clone; the keys are built once at construction.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Builds a service from an explicit secret and lifetime.
    ///
    /// # Errors
    /// Returns [`TokenError::MissingSecret`] when `secret` is blank.
    pub fn new(secret: &str, ttl_minutes: u64) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::MissingSecret);
        }

        // One year keeps `Utc::now() + ttl` far away from chrono's range limits.
        if ttl_minutes > MAX_TTL_MINUTES {
            tracing::warn!(
                requested = ttl_minutes,
                max = MAX_TTL_MINUTES,
                "Token lifetime clamped"
            );
        }
        let minutes = ttl_minutes.min(MAX_TTL_MINUTES) as i64;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(minutes),
        })
    }

    /// Builds a service from `ACCESS_TOKEN_SECRET` and `ACCESS_TOKEN_TTL_MINUTES`.
    pub fn from_config() -> Result<Self, TokenError> {
        Self::new(
            &config::access_token_secret(),
            config::access_token_ttl_minutes(),
        )
    }

    /// Default lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `email` with the configured lifetime.
    pub fn issue(&self, email: &str) -> Result<IssuedToken, TokenError> {
        self.issue_with_ttl(email, self.ttl)
    }

    /// Issues a token for `email` that expires after `ttl`.
    pub fn issue_with_ttl(&self, email: &str, ttl: Duration) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            email: email.to_owned(),
            iat: now.timestamp().max(0) as usize,
            exp: expires_at.timestamp().max(0) as usize,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Encode)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verifies signature and expiry, returning the identity claim.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::InvalidToken)
    }
}
