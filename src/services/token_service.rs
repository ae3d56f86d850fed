//! Token service - issues and validates signed, time-limited bearer tokens.
//!
//! Tokens are HS256 JWTs carrying only the user id and an expiry. Expiry is
//! checked here rather than by the JWT library so the boundary is exact: a
//! token is expired from the second `now >= exp`, with no leeway.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SECONDS_PER_HOUR};
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User id
    pub sub: i32,
    /// Expiry as a unix timestamp (seconds)
    pub exp: i64,
}

/// Signs and verifies tokens with one process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let hours = config.jwt_expiration_hours();
        let ttl = Duration::try_hours(hours)
            .ok_or_else(|| AppError::internal(format!("Token lifetime of {} hours overflows", hours)))?;
        Ok(Self::new(config.jwt_secret_bytes(), ttl))
    }

    /// Token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Issue a token for `user_id`, valid from now for the configured TTL.
    pub fn issue(&self, user_id: i32) -> AppResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, user_id: i32, now: DateTime<Utc>) -> AppResult<String> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Token expiry is out of range"))?;
        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }

    /// Validate a token and return the user id it was issued for.
    pub fn validate(&self, token: &str) -> AppResult<i32> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as if the current time were `now`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AppResult<i32> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AppError::InvalidToken
        })?;

        if now.timestamp() >= data.claims.exp {
            return Err(AppError::ExpiredToken);
        }

        Ok(data.claims.sub)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_hours", &(self.ttl.num_seconds() / SECONDS_PER_HOUR))
            .finish_non_exhaustive()
    }
}
