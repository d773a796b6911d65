//! End-of-workout summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::session::{Exercise, WorkoutSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Zero-based position of the set within its exercise.
    pub set_index: usize,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub name: String,
    pub sets: Vec<LoggedSet>,
    pub total_reps: u32,
}

impl From<&Exercise> for ExerciseSummary {
    fn from(e: &Exercise) -> Self {
        ExerciseSummary {
            name: e.name().to_string(),
            sets: e
                .reps()
                .iter()
                .enumerate()
                .filter(|&(_, &reps)| reps > 0)
                .map(|(set_index, &reps)| LoggedSet { set_index, reps })
                .collect(),
            total_reps: e.total_reps(),
        }
    }
}

/// Aggregated progress across the whole workout.
///
/// Exercises with no logged set are left out of `exercises`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub exercises: Vec<ExerciseSummary>,
    pub total_exercises_with_progress: usize,
    pub total_sets_logged: usize,
    pub total_reps: u32,
    pub duration_seconds: Option<i64>,
}

impl SummaryReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl WorkoutSession {
    pub fn compute_summary(&self) -> SummaryReport {
        let exercises: Vec<ExerciseSummary> = self
            .exercises
            .iter()
            .filter(|e| e.has_progress())
            .map(ExerciseSummary::from)
            .collect();

        let duration_seconds = match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds()),
            _ => None,
        };

        SummaryReport {
            total_exercises_with_progress: exercises.len(),
            total_sets_logged: self.exercises.iter().map(Exercise::completed_sets).sum(),
            total_reps: self.exercises.iter().map(Exercise::total_reps).sum(),
            exercises,
            duration_seconds,
        }
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout summary")?;
        writeln!(f, "  Exercises: {}", self.total_exercises_with_progress)?;
        writeln!(f, "  Sets: {}", self.total_sets_logged)?;
        writeln!(f, "  Total reps: {}", self.total_reps)?;
        if let Some(secs) = self.duration_seconds {
            writeln!(f, "  Duration: {}m {:02}s", secs / 60, secs % 60)?;
        }
        for exercise in &self.exercises {
            writeln!(f)?;
            writeln!(f, "{} ({} reps)", exercise.name, exercise.total_reps)?;
            for set in &exercise.sets {
                writeln!(f, "  Set {}: {} reps", set.set_index + 1, set.reps)?;
            }
        }
        Ok(())
    }
}
