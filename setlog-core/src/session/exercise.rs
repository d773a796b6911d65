use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(pub u64);

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named movement with a fixed number of sets.
///
/// `reps` always has one slot per set. Completion is derived from it on
/// every read and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    id: ExerciseId,
    name: String,
    reps: Vec<u32>,
}

impl Exercise {
    pub(crate) fn new(id: ExerciseId, name: String, set_count: usize) -> Self {
        Exercise {
            id,
            name,
            reps: vec![0; set_count],
        }
    }

    pub fn id(&self) -> ExerciseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_count(&self) -> usize {
        self.reps.len()
    }

    pub fn reps(&self) -> &[u32] {
        &self.reps
    }

    pub(crate) fn set_reps(&mut self, reps: Vec<u32>) {
        debug_assert_eq!(reps.len(), self.reps.len());
        self.reps = reps;
    }

    pub fn is_completed(&self) -> bool {
        self.reps.iter().all(|&r| r > 0)
    }

    pub fn has_progress(&self) -> bool {
        self.reps.iter().any(|&r| r > 0)
    }

    pub fn completed_sets(&self) -> usize {
        self.reps.iter().filter(|&&r| r > 0).count()
    }

    pub fn total_reps(&self) -> u32 {
        self.reps.iter().sum()
    }

    pub fn snapshot(&self) -> ExerciseSnapshot {
        ExerciseSnapshot::from(self)
    }
}

/// Owned copy of an exercise handed to the view, with derived values filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSnapshot {
    pub id: ExerciseId,
    pub name: String,
    pub set_count: usize,
    pub reps: Vec<u32>,
    pub completed: bool,
    pub completed_sets: usize,
    pub total_reps: u32,
}

impl From<&Exercise> for ExerciseSnapshot {
    fn from(e: &Exercise) -> Self {
        ExerciseSnapshot {
            id: e.id,
            name: e.name.clone(),
            set_count: e.set_count(),
            reps: e.reps.clone(),
            completed: e.is_completed(),
            completed_sets: e.completed_sets(),
            total_reps: e.total_reps(),
        }
    }
}

impl fmt::Display for ExerciseSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            write!(f, "{}: done - {} reps total", self.name, self.total_reps)
        } else {
            write!(
                f,
                "{}: {}/{} sets done",
                self.name, self.completed_sets, self.set_count
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_reps(reps: &[u32]) -> Exercise {
        let mut e = Exercise::new(ExerciseId(1), "Squat".into(), reps.len());
        e.set_reps(reps.to_vec());
        e
    }

    #[test]
    fn completion_needs_every_set() {
        assert!(!with_reps(&[0, 5, 3]).is_completed());
        assert!(with_reps(&[2, 5, 3]).is_completed());
        assert!(!with_reps(&[0, 0, 0]).has_progress());
        assert!(with_reps(&[0, 5, 0]).has_progress());
    }

    #[test]
    fn snapshot_derives_progress() {
        let snap = with_reps(&[10, 8, 0]).snapshot();
        assert_eq!(snap.set_count, 3);
        assert_eq!(snap.completed_sets, 2);
        assert_eq!(snap.total_reps, 18);
        assert!(!snap.completed);
        assert_eq!(snap.to_string(), "Squat: 2/3 sets done");

        let snap = with_reps(&[3, 4]).snapshot();
        assert_eq!(snap.to_string(), "Squat: done - 7 reps total");
    }
}
