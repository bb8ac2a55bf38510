// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Collapse domain errors onto the matching application kind so callers
    /// only have to match one taxonomy.
    pub fn flatten(self) -> Self {
        match self {
            Self::Domain(DomainError::Validation(msg)) => Self::Validation(msg),
            Self::Domain(DomainError::NotFound(msg)) => Self::NotFound(msg),
            Self::Domain(DomainError::Conflict(msg)) => Self::Conflict(msg),
            Self::Domain(DomainError::Persistence(msg)) => Self::Infrastructure(msg),
            other => other,
        }
    }
}
