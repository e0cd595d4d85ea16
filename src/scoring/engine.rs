//! Custom squad points formula.
//!
//! goalkeeper: clean sheets × 25 (only if the feed still lists them as a GK)
//! team:       round((wins × 10 + draws × 4 + goals for × 2) × multiplier)
//! player:     (goals + assists) × 12

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fpl::{Fixture, FplPlayer, StatsSnapshot};
use crate::scoring::matching::{resolve_player, resolve_team_id};
use crate::scoring::multiplier::team_multiplier;
use crate::squad::{Roster, Squad};

pub const CLEAN_SHEET_POINTS: i64 = 25;
pub const WIN_POINTS: i64 = 10;
pub const DRAW_POINTS: i64 = 4;
pub const GOAL_FOR_POINTS: i64 = 2;
pub const GOAL_INVOLVEMENT_POINTS: i64 = 12;

/// Per-slot points; `total` is always the exact sum of the other fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub goalkeeper: i64,
    pub teams: BTreeMap<i32, i64>,
    pub players: BTreeMap<i32, i64>,
    pub total: i64,
}

/// A team's record over finished fixtures, home and away alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTally {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub clean_sheets: u32,
}

impl TeamTally {
    /// Points before the team multiplier.
    pub fn raw_points(&self) -> i64 {
        self.wins as i64 * WIN_POINTS
            + self.draws as i64 * DRAW_POINTS
            + self.goals_for as i64 * GOAL_FOR_POINTS
    }
}

/// Fixtures with a missing score are skipped even when flagged finished.
pub fn tally(team_id: i32, fixtures: &[Fixture]) -> TeamTally {
    let mut t = TeamTally::default();
    for f in fixtures {
        let Some((home, away)) = f.final_score() else {
            continue;
        };
        let (scored, conceded) = if f.team_h == team_id {
            (home, away)
        } else if f.team_a == team_id {
            (away, home)
        } else {
            continue;
        };

        t.played += 1;
        t.goals_for += scored;
        t.goals_against += conceded;
        if conceded == 0 {
            t.clean_sheets += 1;
        }
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => t.wins += 1,
            std::cmp::Ordering::Equal => t.draws += 1,
            std::cmp::Ordering::Less => t.losses += 1,
        }
    }
    t
}

pub fn goalkeeper_points(p: &FplPlayer) -> i64 {
    if p.is_goalkeeper() {
        p.clean_sheets as i64 * CLEAN_SHEET_POINTS
    } else {
        0
    }
}

pub fn player_points(p: &FplPlayer) -> i64 {
    (p.goals_scored as i64 + p.assists as i64) * GOAL_INVOLVEMENT_POINTS
}

pub fn team_points(team_name: &str, record: &TeamTally) -> i64 {
    team_multiplier(team_name).apply(record.raw_points())
}

pub fn score(squad: &Squad, snapshot: &StatsSnapshot) -> ScoreBreakdown {
    score_roster(&squad.roster, snapshot)
}

/// Score a roster. Entries the feed no longer knows about score 0.
pub fn score_roster(roster: &Roster, snapshot: &StatsSnapshot) -> ScoreBreakdown {
    let goalkeeper = roster
        .goalkeeper
        .as_ref()
        .and_then(|gk| resolve_player(&snapshot.players, gk))
        .map(goalkeeper_points)
        .unwrap_or(0);

    let teams: BTreeMap<i32, i64> = roster
        .teams
        .iter()
        .map(|team| {
            let points = resolve_team_id(&snapshot.teams, &snapshot.fixtures, team)
                .map(|id| team_points(&team.name, &tally(id, &snapshot.fixtures)))
                .unwrap_or(0);
            (team.id, points)
        })
        .collect();

    let players: BTreeMap<i32, i64> = roster
        .players
        .iter()
        .map(|player| {
            let points = resolve_player(&snapshot.players, player)
                .map(player_points)
                .unwrap_or(0);
            (player.id, points)
        })
        .collect();

    let total = goalkeeper + teams.values().sum::<i64>() + players.values().sum::<i64>();

    ScoreBreakdown {
        goalkeeper,
        teams,
        players,
        total,
    }
}
