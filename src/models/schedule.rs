//! Schedule, match format, and scheduling errors.

use crate::models::game::Round;
use serde::{Deserialize, Serialize};

/// Unique identifier for a schedule.
pub type ScheduleId = String;

/// Warning attached when the roster is large enough that coverage degrades
/// to greedy packing.
pub const LARGE_ROSTER_WARNING: &str = "large_n; fallback_to_greedy";

/// Errors that can occur while generating a schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Fewer than 5 unique non-empty players after deduplication.
    NotEnoughPlayers { unique: usize },
    /// Court count below 1.
    NoCourts,
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::NotEnoughPlayers { unique } => {
                write!(f, "Need at least 5 players ({} unique players remain)", unique)
            }
            ScheduleError::NoCourts => write!(f, "At least 1 court required"),
        }
    }
}

/// Match format: 1v1 or 2v2.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Singles,
    Doubles,
}

impl MatchType {
    /// Players per team for this format.
    pub fn team_size(self) -> usize {
        match self {
            MatchType::Singles => 1,
            MatchType::Doubles => 2,
        }
    }
}

/// A generated schedule: ordered rounds plus an optional degradation warning.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "scheduleId")]
    pub id: ScheduleId,
    pub rounds: Vec<Round>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
