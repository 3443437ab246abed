use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid appointment: {0}")]
    InvalidAppointment(String),

    #[error("Provider is not available at the requested time")]
    ProviderUnavailable,

    #[error("Appointment conflict: the slot is already booked")]
    Conflict,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
