//! Session module for a single workout.
//!
//! This module provides the `WorkoutSession` state holder: the exercise
//! list, the current phase, and the exercise open in the rep editor.
//! Operations are split across files the same way the session is used:
//! building the list, moving between phases, recording sets, summarising.

mod errors;
mod exercise;
mod exercises;
mod phase;
mod session;
mod sets;
mod summary;
mod workout;

pub use errors::{ErrorKind, Result, WorkoutError};
pub use exercise::{Exercise, ExerciseId, ExerciseSnapshot};
pub use phase::Phase;
pub use session::WorkoutSession;
pub use summary::{ExerciseSummary, LoggedSet, SummaryReport};
