use thiserror::Error as ThisError;
use uniffi::Error;

use crate::session::WorkoutError;

/// Error surfaced to foreign callers. One variant per [`WorkoutError`] kind,
/// carrying its display message.
#[derive(Debug, ThisError, Error)]
#[uniffi(flat_error)]
#[non_exhaustive]
pub enum SetlogError {
    #[error("{0}")]
    InvalidName(String),
    #[error("{0}")]
    InvalidSetCount(String),
    #[error("{0}")]
    DuplicateExercise(String),
    #[error("{0}")]
    IndexOutOfRange(String),
    #[error("{0}")]
    NoExercises(String),
    #[error("{0}")]
    InvalidPhase(String),
    #[error("{0}")]
    NoSelection(String),
    #[error("{0}")]
    NoCompletedExercises(String),
}

impl From<WorkoutError> for SetlogError {
    fn from(e: WorkoutError) -> Self {
        let message = e.to_string();
        match e {
            WorkoutError::InvalidName => SetlogError::InvalidName(message),
            WorkoutError::InvalidSetCount { .. } => SetlogError::InvalidSetCount(message),
            WorkoutError::DuplicateExercise { .. } => SetlogError::DuplicateExercise(message),
            WorkoutError::IndexOutOfRange { .. } => SetlogError::IndexOutOfRange(message),
            WorkoutError::NoExercises => SetlogError::NoExercises(message),
            WorkoutError::InvalidPhase { .. } => SetlogError::InvalidPhase(message),
            WorkoutError::NoSelection => SetlogError::NoSelection(message),
            WorkoutError::NoCompletedExercises => SetlogError::NoCompletedExercises(message),
        }
    }
}
