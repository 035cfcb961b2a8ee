//! Team and matchup enumeration.
//!
//! Players, teams, and matchups are arena-indexed: a team is a sorted vector
//! of player indices, a matchup a pair of team indices. Enumeration order is
//! stable given input order; later tie-breaks rely on it.

use crate::models::MatchType;

/// A candidate match: two teams (by index) that share no player.
#[derive(Clone, Debug)]
pub(crate) struct Matchup {
    pub team_a: usize,
    pub team_b: usize,
    /// Player indices across both teams, team A first.
    pub players: Vec<usize>,
}

impl Matchup {
    pub fn contains(&self, player: usize) -> bool {
        self.players.contains(&player)
    }
}

/// One team per player (singles) or every unordered pair `{i, j}, i < j`
/// (doubles).
pub(crate) fn generate_teams(player_count: usize, match_type: MatchType) -> Vec<Vec<usize>> {
    match match_type {
        MatchType::Singles => (0..player_count).map(|p| vec![p]).collect(),
        MatchType::Doubles => {
            let mut teams = Vec::new();
            for i in 0..player_count {
                for j in (i + 1)..player_count {
                    teams.push(vec![i, j]);
                }
            }
            teams
        }
    }
}

/// Every unordered pair of disjoint teams, in enumeration order.
pub(crate) fn generate_matchups(teams: &[Vec<usize>]) -> Vec<Matchup> {
    let mut matchups = Vec::new();
    for a in 0..teams.len() {
        for b in (a + 1)..teams.len() {
            if teams[a].iter().any(|p| teams[b].contains(p)) {
                continue;
            }
            let mut players = teams[a].clone();
            players.extend_from_slice(&teams[b]);
            matchups.push(Matchup {
                team_a: a,
                team_b: b,
                players,
            });
        }
    }
    matchups
}
