use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourtError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: name must not be empty")]
    EmptyName,

    #[error("{0} has already checked in")]
    AlreadyCheckedIn(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type CourtResult<T> = Result<T, CourtError>;
