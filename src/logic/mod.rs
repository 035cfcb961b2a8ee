//! Scheduling engine: normalisation, enumeration, scoring, packing.

mod combinations;
mod roster;
mod rounds;
mod scoring;
mod validate;

pub use roster::{max_consecutive_rests, LARGE_ROSTER_LIMIT, MIN_PLAYERS};
pub use rounds::{generate_schedule, generate_schedule_with_ids, MAX_ROUNDS};
pub use validate::{compute_rest_stats, validate_schedule, RestStats, ValidationReport};
