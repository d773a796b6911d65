use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::session::WorkoutSession;
use crate::uniffi_interface::errors::SetlogError;
use crate::uniffi_interface::objects::{ExerciseRecord, PhaseRecord, SummaryRecord};

/// One workout session shared with the host app.
#[derive(uniffi::Object)]
pub struct WorkoutTracker {
    session: Mutex<WorkoutSession>,
}

impl WorkoutTracker {
    fn session(&self) -> MutexGuard<'_, WorkoutSession> {
        // every operation is all-or-nothing
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl WorkoutTracker {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        debug!("Creating WorkoutTracker");
        Arc::new(Self {
            session: Mutex::new(WorkoutSession::new()),
        })
    }

    pub fn phase(&self) -> PhaseRecord {
        self.session().phase().into()
    }

    pub fn exercises(&self) -> Vec<ExerciseRecord> {
        self.session()
            .exercises()
            .iter()
            .map(|e| ExerciseRecord::from(e.snapshot()))
            .collect()
    }

    pub fn selected_exercise_index(&self) -> Option<u32> {
        self.session().selected_exercise_index().map(|i| i as u32)
    }

    /// `set_count` is the raw text of the set count field.
    pub fn add_exercise(
        &self,
        name: String,
        set_count: String,
    ) -> Result<ExerciseRecord, SetlogError> {
        let snapshot = self.session().add_exercise_raw(&name, &set_count)?;
        Ok(snapshot.into())
    }

    pub fn remove_exercise(&self, index: u32) -> Result<ExerciseRecord, SetlogError> {
        let snapshot = self.session().remove_exercise(index as usize)?;
        Ok(snapshot.into())
    }

    pub fn can_start_workout(&self) -> bool {
        self.session().can_start_workout()
    }

    pub fn start_workout(&self) -> Result<(), SetlogError> {
        Ok(self.session().start_workout()?)
    }

    pub fn select_exercise_for_editing(&self, index: u32) -> Result<ExerciseRecord, SetlogError> {
        let snapshot = self.session().select_exercise_for_editing(index as usize)?;
        Ok(snapshot.into())
    }

    /// Save the raw text of each set field for the open exercise.
    pub fn record_reps(
        &self,
        reps_by_set: HashMap<u32, String>,
    ) -> Result<ExerciseRecord, SetlogError> {
        let raw: HashMap<usize, String> = reps_by_set
            .into_iter()
            .map(|(set, text)| (set as usize, text))
            .collect();
        let snapshot = self.session().record_reps_raw(&raw)?;
        Ok(snapshot.into())
    }

    pub fn cancel_editing(&self) {
        self.session().cancel_editing();
    }

    pub fn finish_workout(&self) -> Result<(), SetlogError> {
        Ok(self.session().finish_workout()?)
    }

    pub fn compute_summary(&self) -> SummaryRecord {
        self.session().compute_summary().into()
    }

    pub fn reset(&self) {
        self.session().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_round_trip() {
        let tracker = WorkoutTracker::new();
        assert!(matches!(
            tracker.add_exercise("Squat".into(), "eleven".into()),
            Err(SetlogError::InvalidSetCount(_))
        ));
        let added = tracker.add_exercise("Squat".into(), "2".into()).unwrap();
        assert_eq!(added.reps, vec![0, 0]);
        assert!(tracker.can_start_workout());

        tracker.start_workout().unwrap();
        assert_eq!(tracker.phase(), PhaseRecord::InProgress);

        tracker.select_exercise_for_editing(0).unwrap();
        assert_eq!(tracker.selected_exercise_index(), Some(0));
        let saved = tracker
            .record_reps(HashMap::from([(0, "3".to_string()), (1, "4".to_string())]))
            .unwrap();
        assert!(saved.completed);

        tracker.finish_workout().unwrap();
        let summary = tracker.compute_summary();
        assert_eq!(summary.total_reps, 7);
        assert_eq!(summary.total_sets_logged, 2);
        assert!(summary.text.contains("Squat (7 reps)"));

        tracker.reset();
        assert_eq!(tracker.phase(), PhaseRecord::Setup);
        assert!(tracker.exercises().is_empty());
    }
}
