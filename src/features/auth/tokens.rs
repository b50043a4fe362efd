use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::model::AdminSession;
use crate::core::config::AdminAuthConfig;
use crate::core::error::AppError;

const ISSUER: &str = "interiors-catalog";
const AUDIENCE: &str = "interiors-catalog-admin";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iss: String,
    aud: String,
    iat: i64,
    exp: i64,
}

/// Issues and validates short-lived HS256 admin session tokens
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl SessionTokens {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn from_config(config: &AdminAuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.session_ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a session for `username` that expires after the configured ttl
    pub fn issue(&self, username: &str) -> Result<(String, AdminSession), AppError> {
        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| AppError::Internal(format!("Invalid session ttl: {}", e)))?;
        let expires_at = now + ttl;

        let claims = Claims {
            sub: username.to_string(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))?;

        Ok((
            token,
            AdminSession {
                username: username.to_string(),
                expires_at,
            },
        ))
    }

    pub fn validate(&self, token: &str) -> Result<AdminSession, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_audience(&[AUDIENCE]);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(format!("Invalid session token: {}", e)))?
            .claims;

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AppError::Auth("Invalid session expiry".to_string()))?;

        Ok(AdminSession {
            username: claims.sub,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "a-test-secret-that-is-long-enough-for-hs256";

    #[test]
    fn test_issue_then_validate() {
        let tokens = SessionTokens::new(SECRET, Duration::from_secs(600));
        let (token, issued) = tokens.issue("admin").unwrap();

        let session = tokens.validate(&token).unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.expires_at.timestamp(), issued.expires_at.timestamp());
        assert!(session.expires_at > Utc::now());
    }

    #[test]
    fn test_rejects_other_secret() {
        let tokens = SessionTokens::new(SECRET, Duration::from_secs(600));
        let other = SessionTokens::new("another-secret-that-is-also-long-enough", Duration::from_secs(600));
        let (token, _) = other.issue("admin").unwrap();

        assert!(matches!(tokens.validate(&token), Err(AppError::Auth(_))));
    }

    #[test]
    fn test_rejects_expired_token() {
        let tokens = SessionTokens::new(SECRET, Duration::from_secs(600));
        let past = Utc::now() - chrono::Duration::hours(2);
        let claims = Claims {
            sub: "admin".to_string(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            iat: past.timestamp(),
            exp: (past + chrono::Duration::hours(1)).timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &tokens.encoding_key).unwrap();

        assert!(matches!(tokens.validate(&token), Err(AppError::Auth(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        let tokens = SessionTokens::new(SECRET, Duration::from_secs(600));
        assert!(tokens.validate("not.a.token").is_err());
    }
}
