pub mod input;
pub mod logging;
pub mod session;

pub use session::{
    ErrorKind, Exercise, ExerciseId, ExerciseSnapshot, Phase, SummaryReport, WorkoutError,
    WorkoutSession,
};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
#[cfg(feature = "uniffi")]
pub mod uniffi_interface;
