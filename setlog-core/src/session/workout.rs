//! Phase transitions: setup -> in progress -> summary -> setup.

use chrono::Local;
use log::{debug, info};

use crate::session::errors::{Result, WorkoutError};
use crate::session::{Phase, WorkoutSession};

impl WorkoutSession {
    pub fn can_start_workout(&self) -> bool {
        !self.exercises.is_empty()
    }

    /// Move from setup to the workout screen.
    pub fn start_workout(&mut self) -> Result<()> {
        self.require_phase("start_workout", Phase::Setup)?;
        if !self.can_start_workout() {
            debug!("start_workout rejected: no exercises");
            return Err(WorkoutError::NoExercises);
        }

        self.phase = Phase::InProgress;
        self.started_at = Some(Local::now());
        info!(
            "Workout started with {} exercises",
            self.exercises.len()
        );
        Ok(())
    }

    /// Move to the summary screen. Needs at least one fully completed exercise.
    pub fn finish_workout(&mut self) -> Result<()> {
        self.require_phase("finish_workout", Phase::InProgress)?;
        let completed = self.exercises.iter().filter(|e| e.is_completed()).count();
        if completed == 0 {
            debug!("finish_workout rejected: nothing completed");
            return Err(WorkoutError::NoCompletedExercises);
        }

        self.selected = None;
        self.phase = Phase::Summary;
        self.finished_at = Some(Local::now());
        info!(
            "Workout finished, {}/{} exercises completed",
            completed,
            self.exercises.len()
        );
        Ok(())
    }

    /// Drop everything and return to an empty setup screen.
    pub fn reset(&mut self) {
        *self = WorkoutSession::new();
        info!("Session reset for a new workout");
    }
}
