//! Token issuance and verification for the login-protected routes
//!
//! Stateless by construction: the only claim is an expiry timestamp, so a
//! token is valid exactly when its signature matches the fixed secret and
//! the expiry has not passed. No sessions, refresh, or revocation.

use crate::constants::{ADMIN_PASSWORD, ADMIN_USERNAME, JWT_SECRET, TOKEN_TTL_SECONDS};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{dev::Payload, http::StatusCode, FromRequest, HttpRequest, ResponseError};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use thiserror::Error;
use tracing::warn;

/// JWT claims: expiry only, no subject or scopes
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    pub exp: usize,
}

/// Authentication failures, mapped to HTTP statuses at the dispatcher boundary
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    BadCredentials,
    #[error("Missing or invalid Authorization header")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Failed to sign token")]
    Signing,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::BadCredentials | AuthError::MissingToken | AuthError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::MalformedToken => StatusCode::BAD_REQUEST,
            AuthError::Signing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Compare credentials against the compiled-in pair and issue a token
/// expiring [`TOKEN_TTL_SECONDS`] from now
pub fn login(username: &str, password: &str) -> Result<String, AuthError> {
    if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
        return Err(AuthError::BadCredentials);
    }
    let exp = chrono::Utc::now().timestamp() + TOKEN_TTL_SECONDS;
    issue_token(exp as usize)
}

fn issue_token(exp: usize) -> Result<String, AuthError> {
    let claims = Claims { exp };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET),
    )
    .map_err(|_| AuthError::Signing)
}

/// Verify a bearer token string
///
/// Signature and expiry failures deny with 401; a token that cannot be
/// parsed at all denies with 400.
pub fn verify_token(token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    validation.leeway = 0;
    decode::<Claims>(token, &DecodingKey::from_secret(JWT_SECRET), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature
            | ErrorKind::ExpiredSignature
            | ErrorKind::ImmatureSignature => AuthError::InvalidToken,
            _ => AuthError::MalformedToken,
        })
}

fn claims_from_request(req: &HttpRequest) -> Result<Claims, AuthError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;
    let token = header.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)?;
    verify_token(token.trim()).map_err(|e| {
        warn!("Token rejected: {}", e);
        e
    })
}

impl FromRequest for Claims {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from_request(req))
    }
}
