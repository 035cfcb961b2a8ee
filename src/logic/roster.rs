//! Roster normalisation: deduplication and viability thresholds.

use crate::models::ScheduleError;
use std::collections::HashSet;

/// Minimum unique players for a viable schedule.
pub const MIN_PLAYERS: usize = 5;

/// Roster size above which the schedule carries the large-roster warning.
pub const LARGE_ROSTER_LIMIT: usize = 16;

/// Longest allowed run of consecutive resting rounds for a roster of `n`.
pub fn max_consecutive_rests(n: usize) -> i32 {
    if n <= 7 {
        1
    } else {
        2
    }
}

/// Deduplicate players preserving first occurrence; empty names are dropped.
/// Identifiers are opaque and compared exactly.
pub(crate) fn normalize_players(players: &[String]) -> Result<Vec<String>, ScheduleError> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for name in players {
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.clone()) {
            unique.push(name.clone());
        }
    }
    if unique.len() < MIN_PLAYERS {
        return Err(ScheduleError::NotEnoughPlayers {
            unique: unique.len(),
        });
    }
    Ok(unique)
}
