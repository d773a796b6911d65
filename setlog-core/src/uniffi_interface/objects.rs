use crate::session::{ExerciseSnapshot, ExerciseSummary, LoggedSet, Phase, SummaryReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum PhaseRecord {
    Setup,
    InProgress,
    Summary,
}

impl From<Phase> for PhaseRecord {
    fn from(p: Phase) -> Self {
        match p {
            Phase::Setup => PhaseRecord::Setup,
            Phase::InProgress => PhaseRecord::InProgress,
            Phase::Summary => PhaseRecord::Summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ExerciseRecord {
    pub id: u64,
    pub name: String,
    pub set_count: u32,
    pub reps: Vec<u32>,
    pub completed: bool,
    pub completed_sets: u32,
    pub total_reps: u32,
}

impl From<ExerciseSnapshot> for ExerciseRecord {
    fn from(s: ExerciseSnapshot) -> Self {
        ExerciseRecord {
            id: s.id.0,
            name: s.name,
            set_count: s.set_count as u32,
            reps: s.reps,
            completed: s.completed,
            completed_sets: s.completed_sets as u32,
            total_reps: s.total_reps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct LoggedSetRecord {
    pub set_index: u32,
    pub reps: u32,
}

impl From<LoggedSet> for LoggedSetRecord {
    fn from(s: LoggedSet) -> Self {
        LoggedSetRecord {
            set_index: s.set_index as u32,
            reps: s.reps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ExerciseSummaryRecord {
    pub name: String,
    pub sets: Vec<LoggedSetRecord>,
    pub total_reps: u32,
}

impl From<ExerciseSummary> for ExerciseSummaryRecord {
    fn from(s: ExerciseSummary) -> Self {
        ExerciseSummaryRecord {
            name: s.name,
            sets: s.sets.into_iter().map(LoggedSetRecord::from).collect(),
            total_reps: s.total_reps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct SummaryRecord {
    pub exercises: Vec<ExerciseSummaryRecord>,
    pub total_exercises_with_progress: u32,
    pub total_sets_logged: u32,
    pub total_reps: u32,
    pub duration_seconds: Option<i64>,
    /// Plain-text rendering of the whole report.
    pub text: String,
}

impl From<SummaryReport> for SummaryRecord {
    fn from(r: SummaryReport) -> Self {
        let text = r.to_string();
        SummaryRecord {
            exercises: r
                .exercises
                .into_iter()
                .map(ExerciseSummaryRecord::from)
                .collect(),
            total_exercises_with_progress: r.total_exercises_with_progress as u32,
            total_sets_logged: r.total_sets_logged as u32,
            total_reps: r.total_reps,
            duration_seconds: r.duration_seconds,
            text,
        }
    }
}
