//! Session authentication against the shared auth service.
//!
//! Unauthenticated or stale sessions are not errors: they terminate the page
//! load with a redirect to the auth service login page. Only auth-layer
//! infrastructure problems surface as `AuthError`.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dto::review::PageRequestContext;

/// Session cookie key holding the auth service JWT.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Outcome of the authentication step. A redirect is a normal control
/// transfer, not a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Proceed,
    Redirect(String),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth service error: {0}")]
    Service(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

pub trait Authenticator: Send + Sync {
    fn authenticate(&self, ctx: &PageRequestContext) -> AuthResult<AuthOutcome>;
}

/// Claims carried by the auth service session token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

/// Validates the session JWT with the service secret shared with the auth
/// service.
#[derive(Clone)]
pub struct JwtAuthenticator {
    secret: String,
    login_url: String,
}

impl JwtAuthenticator {
    pub fn new(secret: impl Into<String>, login_url: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            login_url: login_url.into(),
        }
    }

    fn login_redirect(&self, next: &str) -> AuthResult<String> {
        let url = reqwest::Url::parse_with_params(&self.login_url, &[("next", next)])
            .map_err(|e| AuthError::Service(format!("invalid login URL: {e}")))?;
        Ok(url.to_string())
    }
}

impl Authenticator for JwtAuthenticator {
    fn authenticate(&self, ctx: &PageRequestContext) -> AuthResult<AuthOutcome> {
        let Some(token) = ctx.token.as_deref() else {
            return Ok(AuthOutcome::Redirect(self.login_redirect(&ctx.url)?));
        };

        let key = DecodingKey::from_secret(self.secret.as_bytes());
        match decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256)) {
            Ok(_) => Ok(AuthOutcome::Proceed),
            Err(err) => {
                log::debug!("Session token rejected: {err}");
                Ok(AuthOutcome::Redirect(self.login_redirect(&ctx.url)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    const SECRET: &str = "test-secret";
    const LOGIN_URL: &str = "https://auth.example.com/login";

    fn token(secret: &str, exp: i64) -> String {
        let claims = Claims {
            sub: "42".to_string(),
            email: "user@example.com".to_string(),
            exp: exp as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn ctx(token: Option<String>) -> PageRequestContext {
        PageRequestContext {
            url: "https://photos.example.com/utilities/quick-review".to_string(),
            token,
            locale: None,
        }
    }

    #[test]
    fn test_valid_token_proceeds() {
        let auth = JwtAuthenticator::new(SECRET, LOGIN_URL);
        let exp = chrono::Utc::now().timestamp() + 3600;

        let outcome = auth.authenticate(&ctx(Some(token(SECRET, exp)))).unwrap();

        assert_eq!(outcome, AuthOutcome::Proceed);
    }

    #[test]
    fn test_missing_token_redirects_with_next() {
        let auth = JwtAuthenticator::new(SECRET, LOGIN_URL);

        let outcome = auth.authenticate(&ctx(None)).unwrap();

        match outcome {
            AuthOutcome::Redirect(target) => {
                assert!(target.starts_with(LOGIN_URL));
                assert!(target.contains("next="));
            }
            AuthOutcome::Proceed => panic!("expected a redirect"),
        }
    }

    #[test]
    fn test_expired_token_redirects() {
        let auth = JwtAuthenticator::new(SECRET, LOGIN_URL);
        let exp = chrono::Utc::now().timestamp() - 3600;

        let outcome = auth.authenticate(&ctx(Some(token(SECRET, exp)))).unwrap();

        assert!(matches!(outcome, AuthOutcome::Redirect(_)));
    }

    #[test]
    fn test_wrong_secret_redirects() {
        let auth = JwtAuthenticator::new(SECRET, LOGIN_URL);
        let exp = chrono::Utc::now().timestamp() + 3600;

        let outcome = auth
            .authenticate(&ctx(Some(token("other-secret", exp))))
            .unwrap();

        assert!(matches!(outcome, AuthOutcome::Redirect(_)));
    }

    #[test]
    fn test_invalid_login_url_is_fatal() {
        let auth = JwtAuthenticator::new(SECRET, "not a url");

        assert!(matches!(
            auth.authenticate(&ctx(None)),
            Err(AuthError::Service(_))
        ));
    }
}
