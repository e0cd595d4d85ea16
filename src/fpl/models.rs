//! Wire shapes of the FPL `bootstrap-static` and `fixtures` endpoints.
//!
//! Only the fields the scoring formula and the feed tables need are kept;
//! everything else in the upstream JSON is ignored.

use serde::{Deserialize, Serialize};

/// FPL `element_type` for goalkeepers.
pub const GOALKEEPER_ELEMENT_TYPE: u8 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FplPlayer {
    pub id: i32,
    #[serde(default)]
    pub web_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    /// 1 = goalkeeper, 2 = defender, 3 = midfielder, 4 = forward.
    pub element_type: u8,
    #[serde(default)]
    pub team: i32,
    #[serde(default)]
    pub total_points: i32,
    #[serde(default)]
    pub clean_sheets: u32,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub assists: u32,
}

impl FplPlayer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.element_type == GOALKEEPER_ELEMENT_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FplTeam {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: i32,
    pub team_h: i32,
    pub team_a: i32,
    /// `None` until the match has been played.
    pub team_h_score: Option<u32>,
    pub team_a_score: Option<u32>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub event: Option<u32>,
}

impl Fixture {
    /// Final `(home, away)` score, only for finished fixtures with both scores.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if !self.finished {
            return None;
        }
        Some((self.team_h_score?, self.team_a_score?))
    }
}

/// The `bootstrap-static` payload, trimmed to players and teams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub elements: Vec<FplPlayer>,
    #[serde(default)]
    pub teams: Vec<FplTeam>,
}

/// Everything scoring needs from one fetch of the feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    pub players: Vec<FplPlayer>,
    pub teams: Vec<FplTeam>,
    pub fixtures: Vec<Fixture>,
}

impl StatsSnapshot {
    pub fn new(bootstrap: Bootstrap, fixtures: Vec<Fixture>) -> Self {
        StatsSnapshot {
            players: bootstrap.elements,
            teams: bootstrap.teams,
            fixtures,
        }
    }
}
