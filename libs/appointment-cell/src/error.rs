use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use shared_database::DatabaseError;
use shared_models::error::AppError;

/// Bad input to the slot calculator. Always the caller's fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("Malformed business hours '{0}': expected \"closed\" or \"HH:MM-HH:MM\" with open before close")]
    MalformedHours(String),

    #[error("Invalid service duration {0}: must be a positive number of minutes")]
    InvalidDuration(i32),

    #[error("Malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("Business hours are missing entries for: {}", .0.join(", "))]
    IncompleteHours(Vec<&'static str>),
}

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Service {0} not found")]
    ServiceNotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Slot {start} on {date} for service {service_id} is no longer available", start = .start_time.format("%H:%M"))]
    SlotUnavailable {
        service_id: i64,
        date: NaiveDate,
        start_time: NaiveTime,
    },

    #[error("Could not create appointment")]
    NotPersisted,

    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<AvailabilityError> for AppError {
    fn from(err: AvailabilityError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::ServiceNotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::Validation(msg) => AppError::ValidationError(msg),
            AppointmentError::SlotUnavailable { .. } => AppError::Conflict(err.to_string()),
            AppointmentError::NotPersisted => AppError::BadRequest(err.to_string()),
            AppointmentError::Availability(e) => e.into(),
            AppointmentError::Database(e) => e.into(),
        }
    }
}
