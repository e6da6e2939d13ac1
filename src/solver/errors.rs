use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error(transparent)]
    InvalidInput(#[from] UtilsError),
}
