//! Data structures for the planner: matches, rounds, schedules, ids.

mod game;
mod ids;
mod schedule;

pub use game::{GameMatch, MatchId, Round};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use schedule::{MatchType, Schedule, ScheduleError, ScheduleId, LARGE_ROSTER_WARNING};
