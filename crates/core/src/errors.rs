use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Booking conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Message meant to be shown to the caller as-is.
    ///
    /// Storage and internal failures are not echoed back; their details only
    /// go to the logs.
    pub fn detail(&self) -> String {
        match self {
            BookingError::NotFound(msg)
            | BookingError::Validation(msg)
            | BookingError::Conflict(msg) => msg.clone(),
            BookingError::Database(_) | BookingError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Stable machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::NotFound(_) => "not_found",
            BookingError::Validation(_) => "validation",
            BookingError::Conflict(_) => "conflict",
            BookingError::Database(_) | BookingError::Internal(_) => "internal",
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
