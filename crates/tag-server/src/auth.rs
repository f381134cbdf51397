use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use infrastructure::AuthConfig;
use thiserror::Error;
use tracing::warn;

use crate::{error::ApiError, state::AppState};

/// Identity attached to an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    Missing,

    #[error("Malformed Authorization header")]
    Malformed,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Decides whether a request may reach the tag routes
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AuthError>;

    /// Realm advertised in the `WWW-Authenticate` challenge
    fn realm(&self) -> &str;
}

/// HTTP Basic against a single configured account
pub struct BasicAuthenticator {
    username: String,
    password: String,
    realm: String,
}

impl BasicAuthenticator {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        realm: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            realm: realm.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.username, &config.password, &config.realm)
    }
}

impl Authenticator for BasicAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AuthError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::Missing)?
            .to_str()
            .map_err(|_| AuthError::Malformed)?;

        let (scheme, encoded) = value.split_once(' ').ok_or(AuthError::Malformed)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::Malformed);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::Malformed)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::Malformed)?;
        let (username, password) = decoded.split_once(':').ok_or(AuthError::Malformed)?;

        // Both are always compared so timing does not tell which one failed
        let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let pass_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
        if !(user_ok & pass_ok) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Principal {
            username: username.to_string(),
        })
    }

    fn realm(&self) -> &str {
        &self.realm
    }
}

/// Compares `candidate` against `expected` in time that depends only on the
/// candidate's length, so a mismatch does not reveal the expected length.
fn constant_time_eq(candidate: &[u8], expected: &[u8]) -> bool {
    if expected.is_empty() {
        return candidate.is_empty();
    }

    let mut diff = u8::from(candidate.len() != expected.len());
    for (i, byte) in candidate.iter().enumerate() {
        diff |= byte ^ expected[i % expected.len()];
    }
    diff == 0
}

/// Rejects unauthenticated requests with 401 and a Basic challenge.
/// On success the [`Principal`] is available to handlers as an extension.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authenticator = &state.authenticator;

    match authenticator.authenticate(request.headers()) {
        Ok(principal) => {
            request.extensions_mut().insert(principal);
            Ok(next.run(request).await)
        }
        Err(e) => {
            if e == AuthError::InvalidCredentials {
                warn!(path = %request.uri().path(), "rejected credentials");
            }
            Err(ApiError::Unauthorized {
                message: e.to_string(),
                realm: authenticator.realm().to_string(),
            })
        }
    }
}
