//! Badminton round-robin planner: library with models and scheduling engine.

pub mod logic;
pub mod models;

pub use logic::{
    compute_rest_stats, generate_schedule, generate_schedule_with_ids, max_consecutive_rests,
    validate_schedule, RestStats, ValidationReport, LARGE_ROSTER_LIMIT, MAX_ROUNDS, MIN_PLAYERS,
};
pub use models::{
    GameMatch, IdGenerator, MatchId, MatchType, Round, Schedule, ScheduleError, ScheduleId,
    SequentialIdGenerator, UuidIdGenerator, LARGE_ROSTER_WARNING,
};
