//! # Admin Gate
//!
//! A single shared secret unlocks the elevated operations: team assignment,
//! reset, reload, the absentee list and the attendance export. A successful
//! login hands out a session token that stays admin until it is logged out.
//! There is no lockout or rate limiting.
//!
//! Admin-only session operations take an [`AdminGrant`], which can only be
//! obtained from [`AdminGate::grant`] with a live token.

use std::{collections::HashSet, fmt};

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{CourtError, CourtResult};

/// Checks a candidate secret against the configured admin credential.
pub trait CredentialCheck: Send + Sync {
    fn verify(&self, candidate: &str) -> bool;
}

/// Proof that the caller holds a live admin token.
#[derive(Debug)]
pub struct AdminGrant {
    token: Uuid,
}

pub struct AdminGate {
    check: Box<dyn CredentialCheck>,
    tokens: HashSet<Uuid>,
}

impl fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminGate")
            .field("active_tokens", &self.tokens.len())
            .finish()
    }
}

impl AdminGate {
    pub fn new(check: impl CredentialCheck + 'static) -> Self {
        Self {
            check: Box::new(check),
            tokens: HashSet::new(),
        }
    }

    /// Exchanges the shared secret for a new admin token.
    pub fn login(&mut self, candidate: &str) -> CourtResult<Uuid> {
        if !self.check.verify(candidate) {
            debug!("Admin login rejected");
            return Err(CourtError::Authentication("Invalid admin password".to_string()));
        }

        let token = Uuid::new_v4();
        self.tokens.insert(token);
        info!("Admin session opened");
        Ok(token)
    }

    /// Returns the token to non-admin mode.
    pub fn logout(&mut self, grant: AdminGrant) {
        self.tokens.remove(&grant.token);
        info!("Admin session closed");
    }

    pub fn is_admin(&self, token: Option<Uuid>) -> bool {
        token.is_some_and(|t| self.tokens.contains(&t))
    }

    pub fn grant(&self, token: Option<Uuid>) -> CourtResult<AdminGrant> {
        match token {
            Some(token) if self.tokens.contains(&token) => Ok(AdminGrant { token }),
            _ => Err(CourtError::Authorization(
                "Admin privileges required".to_string(),
            )),
        }
    }
}
