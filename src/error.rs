use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid date: {reason}")]
    InvalidDate { reason: String },

    #[error("Required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid reservation: {reason}")]
    InvalidReservation { reason: String },

    #[error("Homestay not found: {id}")]
    HomestayNotFound { id: String },

    #[error("Cart item not found: {id}")]
    ItemNotFound { id: String },

    #[error("Terms and conditions must be accepted before payment")]
    TermsNotAccepted,

    #[error("A payment is already being processed")]
    PaymentInProgress,

    #[error("Payment has already been completed")]
    AlreadyPaid,

    #[error("Payment processing timed out after {secs}s")]
    PaymentTimeout { secs: u64 },

    #[error("Payment declined: {reason}")]
    PaymentDeclined { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;
