use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const SESSION_TTL_HOURS: i64 = 24;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and checks admin session tokens with the process-wide secret.
///
/// Tokens are stateless: a token stays valid until it expires, and changing the
/// secret invalidates every token issued under the old one.
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionKeys {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue(&self) -> Result<String> {
        self.issue_at(Utc::now())
    }

    pub fn issue_at(&self, issued_at: DateTime<Utc>) -> Result<String> {
        let expires_at = issued_at
            .checked_add_signed(Duration::hours(SESSION_TTL_HOURS))
            .ok_or_else(|| AppError::InternalError("Failed to calculate expiration".to_string()))?;

        let claims = SessionClaims {
            logged_in: true,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Token generation failed: {}", e)))
    }

    /// Never errors: any decoding, signature, algorithm or expiry failure is `false`.
    pub fn verify(&self, token: &str) -> bool {
        match decode::<SessionClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => data.claims.logged_in,
            Err(e) => {
                tracing::debug!("Session token rejected: {}", e);
                false
            }
        }
    }
}
