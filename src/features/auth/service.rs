use std::sync::Arc;

use validator::Validate;

use super::dto::{LoginRequestDto, LoginResponseDto};
use super::tokens::SessionTokens;
use crate::core::config::AdminAuthConfig;
use crate::core::error::{AppError, Result};

/// Single configured admin account. Not a credential system: no users
/// table, no refresh tokens.
pub struct AuthService {
    username: String,
    password: String,
    tokens: Arc<SessionTokens>,
}

impl AuthService {
    pub fn new(config: &AdminAuthConfig, tokens: Arc<SessionTokens>) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            tokens,
        }
    }

    pub fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;

        if dto.username != self.username || dto.password != self.password {
            tracing::warn!("Rejected admin login for '{}'", dto.username);
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let (access_token, session) = self.tokens.issue(&dto.username)?;
        tracing::info!("Admin session issued for '{}'", session.username);

        Ok(LoginResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.ttl().as_secs(),
            expires_at: session.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};

    fn service() -> (Arc<SessionTokens>, AuthService) {
        let config = AdminAuthConfig {
            username: "admin".to_string(),
            password: "decor-2025".to_string(),
            jwt_secret: "a-test-secret-that-is-long-enough-for-hs256".to_string(),
            session_ttl: Duration::from_secs(900),
        };
        let tokens = Arc::new(SessionTokens::from_config(&config));
        (tokens.clone(), AuthService::new(&config, tokens))
    }

    #[test]
    fn test_login_issues_valid_token() {
        let (tokens, service) = service();
        let response = assert_ok!(service.login(LoginRequestDto {
            username: "admin".to_string(),
            password: "decor-2025".to_string(),
        }));

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 900);
        let session = assert_ok!(tokens.validate(&response.access_token));
        assert_eq!(session.username, "admin");
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let (_, service) = service();
        let err = assert_err!(service.login(LoginRequestDto {
            username: "admin".to_string(),
            password: "guess".to_string(),
        }));
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        let (_, service) = service();
        let result = service.login(LoginRequestDto {
            username: String::new(),
            password: String::new(),
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
