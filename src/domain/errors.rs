use thiserror::Error;

/// Reasons a split cannot be computed from the current inputs.
///
/// The `Display` text is the message shown to the user next to the zero result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a valid bill amount.")]
    InvalidBill,
    #[error("Number of people must be at least 1.")]
    InvalidPartySize,
}

pub type ValidationResult<T> = Result<T, ValidationError>;
