//! # Authentication Module
//!
//! Admin credential handling for the Courtside API. The shared admin secret is
//! kept as an Argon2 hash; a successful login yields a bearer token that the
//! [`AdminToken`] extractor reads back on later requests.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use courtside_core::{CredentialCheck, errors::CourtError};
use eyre::{Result, eyre};
use uuid::Uuid;

use crate::middleware::error_handling::AppError;

/// Hashes a password using the Argon2 algorithm
///
/// A random salt is generated for every call and the result is returned in
/// PHC string format, suitable for `ADMIN_PASSWORD_HASH`.
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Admin credential verified against a stored Argon2 hash.
#[derive(Debug, Clone)]
pub struct Argon2Credential {
    hash: String,
}

impl Argon2Credential {
    /// Wraps a PHC string, rejecting anything that is not a valid hash.
    pub fn new(hash: impl Into<String>) -> Result<Self> {
        let hash = hash.into();
        PasswordHash::new(&hash).map_err(|e| eyre!("Invalid admin password hash: {}", e))?;
        Ok(Self { hash })
    }
}

impl CredentialCheck for Argon2Credential {
    fn verify(&self, candidate: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Bearer token from the `Authorization` header, if one was sent.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken(pub Option<Uuid>);

#[async_trait]
impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(AdminToken(None));
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .and_then(|t| Uuid::parse_str(t.trim()).ok())
            .ok_or_else(|| {
                AppError(CourtError::Authentication(
                    "Malformed Authorization header".to_string(),
                ))
            })?;

        Ok(AdminToken(Some(token)))
    }
}
