use thiserror::Error;

/// Input rejected before the search is started
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Target must be a positive integer")]
    InvalidTarget,
    #[error("Numbers must all be positive integers")]
    InvalidNumber,
    #[error("There can be no more than {max} numbers")]
    TooManyNumbers { max: usize, count: usize },
    #[error("At least one number is required")]
    NoNumbers,
    #[error("Not a positive integer: '{0}'")]
    NotAPositiveInteger(String),
}
