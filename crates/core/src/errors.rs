use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot {0} is already booked. Please choose a different time.")]
    SlotUnavailable(String),

    #[error("Slot {0} is not offered for the selected doctor and date")]
    UnknownSlot(String),

    #[error("Request failed: {0}")]
    Remote(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
