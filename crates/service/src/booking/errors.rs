use thiserror::Error;

use crate::auth::errors::AuthError;
use crate::booking::domain::AppointmentStatus;

/// Business errors for booking workflows
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl BookingError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            BookingError::Validation(_) => 2001,
            BookingError::Forbidden(_) => 2002,
            BookingError::NotFound(_) => 2003,
            BookingError::Conflict(_) => 2004,
            BookingError::Repository(_) => 2200,
        }
    }

    pub(crate) fn slot_taken() -> Self {
        BookingError::Conflict("time slot is already booked".into())
    }

    /// Customers may only touch their own appointments while pending.
    pub(crate) fn not_pending(status: AppointmentStatus) -> Self {
        BookingError::Forbidden(format!("appointment is {status}, only pending ones can change"))
    }
}

/// Only the admin gate feeds auth errors into booking flows; anything other
/// than a storage failure there means the caller lacks rights.
impl From<AuthError> for BookingError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Forbidden(msg) => BookingError::Forbidden(msg),
            AuthError::Repository(msg) => BookingError::Repository(msg),
            other => BookingError::Forbidden(other.to_string()),
        }
    }
}

impl From<models::errors::ModelError> for BookingError {
    fn from(e: models::errors::ModelError) -> Self {
        use models::errors::ModelError;
        match e {
            ModelError::Validation(msg) => BookingError::Validation(msg),
            // only the live-slot partial index can collide on appointment writes
            ModelError::Duplicate(_) => BookingError::slot_taken(),
            ModelError::MissingReference(msg) => BookingError::NotFound(msg),
            ModelError::Db(msg) => BookingError::Repository(msg),
        }
    }
}
