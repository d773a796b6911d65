//! The rep editor: open an exercise, write its sets, close it.

use log::debug;
use std::collections::HashMap;

use crate::input::{clamp_reps, parse_reps};
use crate::session::errors::{Result, WorkoutError};
use crate::session::{ExerciseSnapshot, Phase, WorkoutSession};

impl WorkoutSession {
    /// Open the exercise at `index` for editing and return its current state.
    pub fn select_exercise_for_editing(&mut self, index: usize) -> Result<ExerciseSnapshot> {
        self.require_phase("select_exercise_for_editing", Phase::InProgress)?;
        self.check_index(index)?;

        self.selected = Some(index);
        let exercise = &self.exercises[index];
        debug!("Editing exercise {} {:?}", exercise.id(), exercise.name());
        Ok(exercise.snapshot())
    }

    /// Store reps for the open exercise and close the editor.
    ///
    /// Sets missing from `reps_by_set` become 0. Values are clamped to
    /// `0..=MAX_REPS`. Keys past the last set are ignored.
    pub fn record_reps(&mut self, reps_by_set: &HashMap<usize, i64>) -> Result<ExerciseSnapshot> {
        self.store_reps(|set| reps_by_set.get(&set).copied().map(clamp_reps), reps_by_set.keys())
    }

    /// Like [`record_reps`](Self::record_reps), with each set's raw field text.
    /// Blank or non-numeric text counts as 0.
    pub fn record_reps_raw(
        &mut self,
        raw_by_set: &HashMap<usize, String>,
    ) -> Result<ExerciseSnapshot> {
        self.store_reps(|set| raw_by_set.get(&set).map(|s| parse_reps(s)), raw_by_set.keys())
    }

    fn store_reps<'a>(
        &mut self,
        value_for: impl Fn(usize) -> Option<u32>,
        keys: impl Iterator<Item = &'a usize>,
    ) -> Result<ExerciseSnapshot> {
        let Some(index) = self.selected else {
            debug!("record_reps rejected: nothing selected");
            return Err(WorkoutError::NoSelection);
        };
        // selections only exist while in progress
        self.require_phase("record_reps", Phase::InProgress)?;
        self.check_index(index)?;

        let exercise = &mut self.exercises[index];
        let set_count = exercise.set_count();
        for &extra in keys.filter(|&&k| k >= set_count) {
            debug!(
                "Ignoring reps for set {} of {:?} ({} sets)",
                extra,
                exercise.name(),
                set_count
            );
        }

        let reps: Vec<u32> = (0..set_count).map(|set| value_for(set).unwrap_or(0)).collect();
        exercise.set_reps(reps);
        debug!(
            "Recorded reps {:?} for {:?}, completed={}",
            exercise.reps(),
            exercise.name(),
            exercise.is_completed()
        );

        let snapshot = exercise.snapshot();
        self.selected = None;
        Ok(snapshot)
    }

    /// Close the editor without saving. Safe to call when nothing is open.
    pub fn cancel_editing(&mut self) {
        if self.selected.take().is_some() {
            debug!("Editing cancelled");
        }
    }
}
