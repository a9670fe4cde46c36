//! Error types for eventdesk.

use thiserror::Error;

use crate::booking::BookingStatus;

/// Errors that can occur in eventdesk operations.
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Invalid booking status '{0}'. Expected one of: {expected}", expected = BookingStatus::names().join(", "))]
    InvalidStatus(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, EventDeskError>;
