//! Match and Round: the units a schedule is built from.

use serde::{Deserialize, Serialize};

/// Unique identifier for a match (opaque string from the id generator).
pub type MatchId = String;

/// A single match: two teams that share no player.
///
/// Teams hold 1 player each for singles, 2 for doubles. Serialized as
/// `teamA` / `teamB` on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    #[serde(rename = "teamA")]
    pub team_a: Vec<String>,
    #[serde(rename = "teamB")]
    pub team_b: Vec<String>,
}

impl GameMatch {
    /// All players in this match, team A first.
    pub fn players(&self) -> impl Iterator<Item = &String> {
        self.team_a.iter().chain(self.team_b.iter())
    }
}

/// One time-slice of the schedule: concurrent matches plus the players
/// sitting out. `completed` starts false; the engine never flips it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// `r{1-based index}`.
    pub id: String,
    pub matches: Vec<GameMatch>,
    pub resting: Vec<String>,
    pub completed: bool,
}
