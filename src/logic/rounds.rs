//! Round packing, urgency repair, and the scheduling loop.

use super::combinations::{generate_matchups, generate_teams, Matchup};
use super::roster::{max_consecutive_rests, normalize_players, LARGE_ROSTER_LIMIT};
use super::scoring::{rank_candidates, RotationTracker};
use crate::models::{
    GameMatch, IdGenerator, MatchId, MatchType, Round, Schedule, ScheduleError, UuidIdGenerator,
    LARGE_ROSTER_WARNING,
};

/// Hard cap on produced rounds, guarding against pathological inputs.
pub const MAX_ROUNDS: usize = 1000;

/// Generate a full round-robin schedule with random UUID ids.
pub fn generate_schedule(
    players: &[String],
    courts: usize,
    match_type: MatchType,
) -> Result<Schedule, ScheduleError> {
    let mut ids = UuidIdGenerator;
    generate_schedule_with_ids(players, courts, match_type, &mut ids)
}

/// Generate a full round-robin schedule with a caller-supplied id source.
/// For fixed inputs and a fixed id sequence the output is identical across
/// runs.
///
/// 1. Normalise the roster (dedupe, viability checks).
/// 2. Enumerate teams and disjoint-team matchups.
/// 3. Per round: safety gate, priority ranking, two-pass packing, urgency
///    repair, commit.
/// 4. Stop when the matchup pool empties, the gate trips, or the cap hits.
pub fn generate_schedule_with_ids(
    players: &[String],
    courts: usize,
    match_type: MatchType,
    ids: &mut dyn IdGenerator,
) -> Result<Schedule, ScheduleError> {
    let roster = normalize_players(players)?;
    if courts < 1 {
        return Err(ScheduleError::NoCourts);
    }
    let n = roster.len();
    let warning = (n > LARGE_ROSTER_LIMIT).then(|| LARGE_ROSTER_WARNING.to_string());
    let threshold = max_consecutive_rests(n);

    let teams = generate_teams(n, match_type);
    let matchups = generate_matchups(&teams);
    let schedule_id = ids.next_id();
    let pool_ids: Vec<MatchId> = matchups.iter().map(|_| ids.next_id()).collect();

    let mut tracker = RotationTracker::new(n, teams.len());
    let mut remaining: Vec<usize> = (0..matchups.len()).collect();
    let mut rounds: Vec<Round> = Vec::new();

    while !remaining.is_empty() && rounds.len() < MAX_ROUNDS {
        let round = rounds.len() as i32;
        let urgent = tracker.urgent_players(round, threshold);

        // Safety gate: if an urgent player exists whom no remaining matchup
        // can seat, stop before the rest cap breaks.
        if !urgent.is_empty()
            && !remaining
                .iter()
                .any(|&m| urgent.iter().any(|&p| matchups[m].contains(p)))
        {
            break;
        }

        let ranked = rank_candidates(&remaining, &matchups, &tracker, round, threshold);
        let mut used = vec![false; n];
        let mut selected: Vec<usize> = Vec::new();

        // Pass A: force matchups that seat an urgent player.
        for &m in &ranked {
            if selected.len() == courts {
                break;
            }
            let matchup = &matchups[m];
            if matchup.players.iter().any(|p| urgent.contains(p))
                && matchup.players.iter().all(|&p| !used[p])
            {
                for &p in &matchup.players {
                    used[p] = true;
                }
                selected.push(m);
            }
        }
        // Pass B: fill the remaining courts with the best available.
        for &m in &ranked {
            if selected.len() == courts {
                break;
            }
            let matchup = &matchups[m];
            if matchup.players.iter().all(|&p| !used[p]) {
                for &p in &matchup.players {
                    used[p] = true;
                }
                selected.push(m);
            }
        }

        let repaired = repair_urgent(&matchups, &urgent, &mut used, &selected, courts);

        if selected.is_empty() && repaired.is_empty() {
            break;
        }

        let mut matches = Vec::with_capacity(selected.len() + repaired.len());
        for &m in &selected {
            matches.push(emit_match(pool_ids[m].clone(), &matchups[m], &teams, &roster));
        }
        for &m in &repaired {
            // Repaired matchups may repeat an earlier match; each occurrence
            // still gets its own id.
            matches.push(emit_match(ids.next_id(), &matchups[m], &teams, &roster));
        }

        let playing: Vec<usize> = (0..n).filter(|&p| used[p]).collect();
        let resting: Vec<String> = (0..n)
            .filter(|&p| !used[p])
            .map(|p| roster[p].clone())
            .collect();
        let teams_used: Vec<usize> = selected
            .iter()
            .chain(repaired.iter())
            .flat_map(|&m| [matchups[m].team_a, matchups[m].team_b])
            .collect();

        rounds.push(Round {
            id: format!("r{}", rounds.len() + 1),
            matches,
            resting,
            completed: false,
        });
        remaining.retain(|m| !selected.contains(m));
        tracker.record_round(round, &playing, &teams_used);
    }

    Ok(Schedule {
        id: schedule_id,
        rounds,
        warning,
    })
}

/// Urgency repair: when packing leaves an urgent player seated nowhere and a
/// court free, walk the full matchup pool (scheduled-before is allowed) and
/// seat the missing players. Returns matchup indices to schedule as
/// duplicates.
fn repair_urgent(
    matchups: &[Matchup],
    urgent: &[usize],
    used: &mut [bool],
    selected: &[usize],
    courts: usize,
) -> Vec<usize> {
    let mut repaired = Vec::new();
    if selected.len() >= courts {
        return repaired;
    }
    let mut missing: Vec<usize> = urgent.iter().copied().filter(|&p| !used[p]).collect();
    if missing.is_empty() {
        return repaired;
    }
    for (m, matchup) in matchups.iter().enumerate() {
        if selected.len() + repaired.len() == courts || missing.is_empty() {
            break;
        }
        if matchup.players.iter().any(|p| missing.contains(p))
            && matchup.players.iter().all(|&p| !used[p])
        {
            for &p in &matchup.players {
                used[p] = true;
            }
            missing.retain(|p| !matchup.players.contains(p));
            repaired.push(m);
        }
    }
    repaired
}

fn emit_match(id: MatchId, matchup: &Matchup, teams: &[Vec<usize>], roster: &[String]) -> GameMatch {
    let names = |team: &[usize]| -> Vec<String> {
        team.iter().map(|&p| roster[p].clone()).collect()
    };
    GameMatch {
        id,
        team_a: names(&teams[matchup.team_a]),
        team_b: names(&teams[matchup.team_b]),
    }
}
