//! Offline invariant checks and rest statistics for generated schedules.

use crate::models::Round;
use std::collections::{HashMap, HashSet};

/// Outcome of checking a round list against its invariants.
#[derive(Clone, Debug)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check that every player appears in at most one match per round and that
/// match ids are unique across the whole schedule.
pub fn validate_schedule(rounds: &[Round]) -> ValidationReport {
    let mut errors = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();
    for round in rounds {
        let mut seen_players: HashSet<&str> = HashSet::new();
        for game in &round.matches {
            if !seen_ids.insert(&game.id) {
                errors.push(format!("duplicate match id {} in round {}", game.id, round.id));
            }
            for player in game.players() {
                if !seen_players.insert(player) {
                    errors.push(format!(
                        "player {} appears in more than one match in round {}",
                        player, round.id
                    ));
                }
            }
        }
    }
    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Per-player rest totals and the spread between most and least rested.
#[derive(Clone, Debug)]
pub struct RestStats {
    pub rest_counts: HashMap<String, u32>,
    pub max_diff: u32,
}

/// Count resting rounds per player. Players who never rest stay at zero.
pub fn compute_rest_stats(rounds: &[Round], players: &[String]) -> RestStats {
    let mut rest_counts: HashMap<String, u32> =
        players.iter().map(|p| (p.clone(), 0)).collect();
    for round in rounds {
        for player in &round.resting {
            if let Some(count) = rest_counts.get_mut(player) {
                *count += 1;
            }
        }
    }
    let max = rest_counts.values().max().copied().unwrap_or(0);
    let min = rest_counts.values().min().copied().unwrap_or(0);
    RestStats {
        rest_counts,
        max_diff: max - min,
    }
}
