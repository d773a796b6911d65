//! Building the exercise list during setup.

use log::debug;

use crate::input::{MAX_SET_COUNT, MIN_SET_COUNT, parse_int_prefix};
use crate::session::errors::{Result, WorkoutError};
use crate::session::{Exercise, ExerciseSnapshot, Phase, WorkoutSession};

impl WorkoutSession {
    /// Add an exercise with `set_count` empty sets.
    pub fn add_exercise(&mut self, name: &str, set_count: i64) -> Result<ExerciseSnapshot> {
        self.insert_exercise(name, Some(set_count), || set_count.to_string())
    }

    /// Add an exercise from the raw text of the set count field.
    pub fn add_exercise_raw(&mut self, name: &str, raw_set_count: &str) -> Result<ExerciseSnapshot> {
        self.insert_exercise(name, parse_int_prefix(raw_set_count), || {
            raw_set_count.to_string()
        })
    }

    fn insert_exercise(
        &mut self,
        name: &str,
        set_count: Option<i64>,
        raw: impl FnOnce() -> String,
    ) -> Result<ExerciseSnapshot> {
        self.require_phase("add_exercise", Phase::Setup)?;

        let name = name.trim();
        if name.is_empty() {
            debug!("add_exercise rejected empty name");
            return Err(WorkoutError::InvalidName);
        }

        let set_count = match set_count {
            Some(n) if (MIN_SET_COUNT..=MAX_SET_COUNT).contains(&n) => n as usize,
            _ => {
                let raw = raw();
                debug!("add_exercise rejected set count {:?}", raw);
                return Err(WorkoutError::InvalidSetCount { raw });
            }
        };

        if self.find_exercise(name).is_some() {
            debug!("add_exercise rejected duplicate {:?}", name);
            return Err(WorkoutError::DuplicateExercise {
                name: name.to_string(),
            });
        }

        let id = self.allocate_id();
        let exercise = Exercise::new(id, name.to_string(), set_count);
        debug!("Added exercise {} {:?} with {} sets", id, name, set_count);
        let snapshot = exercise.snapshot();
        self.exercises.push(exercise);
        Ok(snapshot)
    }

    /// Remove the exercise at `index`, keeping the order of the rest.
    pub fn remove_exercise(&mut self, index: usize) -> Result<ExerciseSnapshot> {
        self.require_phase("remove_exercise", Phase::Setup)?;
        self.check_index(index)?;

        let removed = self.exercises.remove(index);
        debug!("Removed exercise {} {:?}", removed.id(), removed.name());
        Ok(removed.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ErrorKind;

    #[test]
    fn new_exercise_starts_empty() {
        let mut session = WorkoutSession::new();
        for set_count in MIN_SET_COUNT..=MAX_SET_COUNT {
            let name = format!("Move {set_count}");
            let snap = session.add_exercise(&name, set_count).unwrap();
            assert_eq!(snap.set_count, set_count as usize);

            let idx = session.find_exercise(&name).unwrap();
            let exercise = session.exercise(idx).unwrap();
            assert_eq!(exercise.reps(), vec![0; set_count as usize].as_slice());
            assert!(!exercise.is_completed());
        }
        assert_eq!(session.exercises().len(), 10);
    }

    #[test]
    fn name_is_trimmed_and_required() {
        let mut session = WorkoutSession::new();
        let err = session.add_exercise("   ", 3).unwrap_err();
        assert_eq!(err, WorkoutError::InvalidName);

        let snap = session.add_exercise("  Bench Press ", 3).unwrap();
        assert_eq!(snap.name, "Bench Press");
    }

    #[test]
    fn set_count_bounds() {
        let mut session = WorkoutSession::new();
        for bad in [0, -1, 11, 100] {
            assert_eq!(
                session.add_exercise("Row", bad).unwrap_err().kind(),
                ErrorKind::InvalidSetCount
            );
        }
        assert!(session.exercises().is_empty());
        session.add_exercise("One", 1).unwrap();
        session.add_exercise("Ten", 10).unwrap();
    }

    #[test]
    fn raw_set_count_must_be_a_number() {
        let mut session = WorkoutSession::new();
        let err = session.add_exercise_raw("Row", "lots").unwrap_err();
        assert_eq!(
            err,
            WorkoutError::InvalidSetCount {
                raw: "lots".into()
            }
        );
        assert_eq!(
            session.add_exercise_raw("Row", "").unwrap_err().kind(),
            ErrorKind::InvalidSetCount
        );

        let snap = session.add_exercise_raw("Row", " 4").unwrap();
        assert_eq!(snap.set_count, 4);
    }

    #[test]
    fn duplicates_are_exact_match() {
        let mut session = WorkoutSession::new();
        session.add_exercise("Squat", 3).unwrap();
        let before = session.clone();

        let err = session.add_exercise("Squat", 5).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::DuplicateExercise {
                name: "Squat".into()
            }
        );
        assert_eq!(session, before);

        assert_eq!(
            session.add_exercise(" Squat ", 2).unwrap_err().kind(),
            ErrorKind::DuplicateExercise
        );
        session.add_exercise("squat", 2).unwrap();
    }

    #[test]
    fn ids_are_unique() {
        let mut session = WorkoutSession::new();
        let a = session.add_exercise("A", 1).unwrap();
        session.remove_exercise(0).unwrap();
        let b = session.add_exercise("A", 1).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn remove_keeps_order() {
        let mut session = WorkoutSession::new();
        for name in ["A", "B", "C"] {
            session.add_exercise(name, 2).unwrap();
        }
        let removed = session.remove_exercise(1).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<&str> = session.exercises().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["A", "C"]);

        assert_eq!(
            session.remove_exercise(2).unwrap_err(),
            WorkoutError::IndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn list_is_frozen_after_start() {
        let mut session = WorkoutSession::new();
        session.add_exercise("A", 2).unwrap();
        session.start_workout().unwrap();

        assert_eq!(
            session.add_exercise("B", 2).unwrap_err().kind(),
            ErrorKind::InvalidPhase
        );
        assert_eq!(
            session.remove_exercise(0).unwrap_err().kind(),
            ErrorKind::InvalidPhase
        );
        assert_eq!(session.exercises().len(), 1);
    }
}
