//! Rotation state and candidate ordering.
//!
//! The tracker owns per-player and per-team statistics; the scorer turns
//! them into a priority ordering over the remaining matchups. Priorities,
//! highest first: forced rotation, approaching threshold, collective
//! recency, rest balance, minimum waiter, partnership freshness. Ties keep
//! enumeration order.

use super::combinations::Matchup;
use std::cmp::Ordering;

/// Sentinel for teams that have never played. Must stay at or below
/// -(consecutive-rest cap + recency window) so it never reads as recent.
const TEAM_NEVER_USED: i32 = -10;

/// Rest averages closer than this count as balanced and fall through to the
/// next priority.
const REST_BALANCE_TOLERANCE: f64 = 0.3;

#[derive(Clone, Debug)]
struct PlayerState {
    play_count: u32,
    rest_count: u32,
    /// -1 until the player's first match.
    last_played_round: i32,
}

#[derive(Clone, Debug)]
struct TeamState {
    usage_count: u32,
    last_used_round: i32,
}

/// Per-player and per-team statistics for one schedule run, updated once per
/// committed round.
pub(crate) struct RotationTracker {
    players: Vec<PlayerState>,
    teams: Vec<TeamState>,
}

impl RotationTracker {
    pub fn new(player_count: usize, team_count: usize) -> Self {
        Self {
            players: (0..player_count)
                .map(|_| PlayerState {
                    play_count: 0,
                    rest_count: 0,
                    last_played_round: -1,
                })
                .collect(),
            teams: (0..team_count)
                .map(|_| TeamState {
                    usage_count: 0,
                    last_used_round: TEAM_NEVER_USED,
                })
                .collect(),
        }
    }

    /// Rounds since the player last played, as of `round`.
    pub fn wait(&self, player: usize, round: i32) -> i32 {
        round - self.players[player].last_played_round
    }

    /// Players whose wait has reached the consecutive-rest cap; they must
    /// play this round.
    pub fn urgent_players(&self, round: i32, threshold: i32) -> Vec<usize> {
        (0..self.players.len())
            .filter(|&p| self.wait(p, round) >= threshold)
            .collect()
    }

    /// Commit one round: playing players get a play and a timestamp,
    /// everyone else a rest; used teams get a usage and a timestamp.
    pub fn record_round(&mut self, round: i32, playing: &[usize], teams_used: &[usize]) {
        for (p, state) in self.players.iter_mut().enumerate() {
            if playing.contains(&p) {
                state.play_count += 1;
                state.last_played_round = round;
            } else {
                state.rest_count += 1;
            }
        }
        for &t in teams_used {
            let team = &mut self.teams[t];
            team.usage_count += 1;
            team.last_used_round = round;
        }
    }
}

/// Priority signals for one candidate matchup at the current round.
#[derive(Clone, Debug)]
struct MatchScore {
    max_wait: i32,
    sum_wait: i32,
    min_wait: i32,
    avg_rest: f64,
    freshness: i64,
}

impl MatchScore {
    fn evaluate(matchup: &Matchup, tracker: &RotationTracker, round: i32) -> Self {
        let mut max_wait = i32::MIN;
        let mut min_wait = i32::MAX;
        let mut sum_wait = 0;
        let mut rest_total = 0u32;
        for &p in &matchup.players {
            let wait = tracker.wait(p, round);
            max_wait = max_wait.max(wait);
            min_wait = min_wait.min(wait);
            sum_wait += wait;
            rest_total += tracker.players[p].rest_count;
        }
        let avg_rest = f64::from(rest_total) / matchup.players.len() as f64;
        let freshness = freshness_score(
            &tracker.teams[matchup.team_a],
            &tracker.teams[matchup.team_b],
            round,
        );
        Self {
            max_wait,
            sum_wait,
            min_wait,
            avg_rest,
            freshness,
        }
    }
}

/// Partnership freshness: total usage, a per-team recency penalty, and a
/// recency tie-breaker. Lower is fresher.
fn freshness_score(a: &TeamState, b: &TeamState, round: i32) -> i64 {
    let since_a = round - a.last_used_round;
    let since_b = round - b.last_used_round;
    let mut score = i64::from(a.usage_count + b.usage_count) * 100;
    for since in [since_a, since_b] {
        if since <= 1 {
            score += 100;
        } else if since <= 2 {
            score += 50;
        }
    }
    score + i64::from(10 - since_a.min(since_b))
}

/// Less = ranks earlier (gets a court first).
fn compare(a: &MatchScore, b: &MatchScore, threshold: i32) -> Ordering {
    let warning = (threshold - 1).max(1);
    if a.max_wait >= threshold || b.max_wait >= threshold {
        // Forced rotation: someone is at the cap.
        let ord = b.max_wait.cmp(&a.max_wait);
        if ord != Ordering::Equal {
            return ord;
        }
    } else if a.max_wait >= warning || b.max_wait >= warning {
        let ord = b.max_wait.cmp(&a.max_wait);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    let ord = b.sum_wait.cmp(&a.sum_wait);
    if ord != Ordering::Equal {
        return ord;
    }
    if (a.avg_rest - b.avg_rest).abs() > REST_BALANCE_TOLERANCE {
        let ord = b.avg_rest.total_cmp(&a.avg_rest);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    let ord = b.min_wait.cmp(&a.min_wait);
    if ord != Ordering::Equal {
        return ord;
    }
    a.freshness.cmp(&b.freshness)
}

/// Order the remaining matchups, most rotation-starved first.
///
/// The rest-balance tolerance makes `compare` non-transitive, which std's
/// sort may reject at runtime; a stable insertion sort handles it and keeps
/// enumeration order on ties.
pub(crate) fn rank_candidates(
    remaining: &[usize],
    matchups: &[Matchup],
    tracker: &RotationTracker,
    round: i32,
    threshold: i32,
) -> Vec<usize> {
    let mut ranked: Vec<(usize, MatchScore)> = remaining
        .iter()
        .map(|&m| (m, MatchScore::evaluate(&matchups[m], tracker, round)))
        .collect();
    for i in 1..ranked.len() {
        let mut j = i;
        while j > 0 && compare(&ranked[j - 1].1, &ranked[j].1, threshold) == Ordering::Greater {
            ranked.swap(j - 1, j);
            j -= 1;
        }
    }
    ranked.into_iter().map(|(m, _)| m).collect()
}
