use thiserror::Error as ThisError;

use crate::session::Phase;

pub type Result<T> = std::result::Result<T, WorkoutError>;

/// Validation failures returned by [`WorkoutSession`](crate::session::WorkoutSession) operations.
///
/// Every failure leaves the session exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum WorkoutError {
    #[error("exercise name must not be empty")]
    InvalidName,
    #[error("set count must be a number between 1 and 10, got {raw:?}")]
    InvalidSetCount { raw: String },
    #[error("exercise {name:?} has already been added")]
    DuplicateExercise { name: String },
    #[error("no exercise at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("add at least one exercise before starting")]
    NoExercises,
    #[error("{operation} is not allowed during {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },
    #[error("no exercise is open for editing")]
    NoSelection,
    #[error("complete at least one exercise before finishing")]
    NoCompletedExercises,
}

/// Fieldless view of [`WorkoutError`] for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidName,
    InvalidSetCount,
    DuplicateExercise,
    IndexOutOfRange,
    NoExercises,
    InvalidPhase,
    NoSelection,
    NoCompletedExercises,
}

impl WorkoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkoutError::InvalidName => ErrorKind::InvalidName,
            WorkoutError::InvalidSetCount { .. } => ErrorKind::InvalidSetCount,
            WorkoutError::DuplicateExercise { .. } => ErrorKind::DuplicateExercise,
            WorkoutError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            WorkoutError::NoExercises => ErrorKind::NoExercises,
            WorkoutError::InvalidPhase { .. } => ErrorKind::InvalidPhase,
            WorkoutError::NoSelection => ErrorKind::NoSelection,
            WorkoutError::NoCompletedExercises => ErrorKind::NoCompletedExercises,
        }
    }

    pub(crate) fn invalid_phase(operation: &'static str, phase: Phase) -> Self {
        WorkoutError::InvalidPhase { operation, phase }
    }
}
