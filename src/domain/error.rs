use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// No reservation with the given id
    #[error("Reservation {0} not found")]
    NotFound(u32),

    /// A list produced zero records; an empty result is never a success
    #[error("No reservations matched the supplied filters")]
    NoMatches,

    /// Missing or malformed input
    #[error("Validation: {0}")]
    Validation(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
