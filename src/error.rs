use thiserror::Error;

use crate::domain::services::availability::AvailabilityError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Availability(#[from] AvailabilityError),
    #[error("Internal error")]
    Internal,
}
