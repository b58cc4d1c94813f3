use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalonError {
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type SalonResult<T> = Result<T, SalonError>;
