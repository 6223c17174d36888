use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid finger number: {value}. Must be an integer between 1 and 10.")]
    InvalidArgument { value: String },
    #[error("Finger number {number} is out of range (have {len})")]
    OutOfRange { number: u8, len: usize },
    #[error("Finger {0} is already selected")]
    AlreadySelected(u8),
}

impl SelectionError {
    pub(crate) fn invalid(value: impl ToString) -> Self {
        SelectionError::InvalidArgument {
            value: value.to_string(),
        }
    }
}
