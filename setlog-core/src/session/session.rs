use chrono::{DateTime, Local};

use crate::session::errors::{Result, WorkoutError};
use crate::session::{Exercise, ExerciseId, Phase};

/// All state for one workout, from setup through the summary screen.
///
/// The view owns exactly one of these and passes it to its handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub(crate) exercises: Vec<Exercise>,
    pub(crate) phase: Phase,
    pub(crate) selected: Option<usize>,
    pub(crate) started_at: Option<DateTime<Local>>,
    pub(crate) finished_at: Option<DateTime<Local>>,
    next_id: u64,
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutSession {
    pub fn new() -> Self {
        Self {
            exercises: Vec::new(),
            phase: Phase::Setup,
            selected: None,
            started_at: None,
            finished_at: None,
            next_id: 1,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn exercise(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    pub fn find_exercise(&self, name: &str) -> Option<usize> {
        self.exercises.iter().position(|e| e.name() == name)
    }

    /// Index of the exercise open in the rep editor, if any.
    pub fn selected_exercise_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        self.finished_at
    }

    pub(crate) fn allocate_id(&mut self) -> ExerciseId {
        let id = ExerciseId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn require_phase(&self, operation: &'static str, phase: Phase) -> Result<()> {
        if self.phase != phase {
            return Err(WorkoutError::invalid_phase(operation, self.phase));
        }
        Ok(())
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.exercises.len() {
            return Err(WorkoutError::IndexOutOfRange {
                index,
                len: self.exercises.len(),
            });
        }
        Ok(())
    }
}
