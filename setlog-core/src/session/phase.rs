use serde::{Deserialize, Serialize};
use std::fmt;

/// Which screen of the workout the session is on. Governs which operations are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Setup,
    InProgress,
    Summary,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Summary => write!(f, "summary"),
        }
    }
}
