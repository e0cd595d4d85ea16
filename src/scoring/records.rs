//! League-wide tables derived from the feed (team records, top goalkeepers
//! and top contributors), each ranked by the squad points they would earn.

use serde::Serialize;

use crate::fpl::{FplPlayer, StatsSnapshot};
use crate::scoring::engine::{goalkeeper_points, player_points, tally, team_points, TeamTally};
use crate::scoring::multiplier::team_multiplier;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: i32,
    pub name: String,
    #[serde(flatten)]
    pub record: TeamTally,
    pub multiplier: f64,
    pub fantasy_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalkeeperRow {
    pub id: i32,
    pub name: String,
    pub web_name: String,
    pub clean_sheets: u32,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub id: i32,
    pub name: String,
    pub web_name: String,
    pub goals_scored: u32,
    pub assists: u32,
    pub points: i64,
}

/// One row per feed team, highest fantasy points first.
pub fn team_records(snapshot: &StatsSnapshot) -> Vec<TeamRecord> {
    let mut rows: Vec<TeamRecord> = snapshot
        .teams
        .iter()
        .map(|team| {
            let record = tally(team.id, &snapshot.fixtures);
            TeamRecord {
                id: team.id,
                name: team.name.clone(),
                record,
                multiplier: team_multiplier(&team.name).as_f64(),
                fantasy_points: team_points(&team.name, &record),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.fantasy_points.cmp(&a.fantasy_points));
    rows
}

/// Goalkeepers with at least one clean sheet.
pub fn goalkeeper_table(players: &[FplPlayer]) -> Vec<GoalkeeperRow> {
    let mut rows: Vec<GoalkeeperRow> = players
        .iter()
        .filter(|p| p.is_goalkeeper() && p.clean_sheets > 0)
        .map(|p| GoalkeeperRow {
            id: p.id,
            name: p.full_name(),
            web_name: p.web_name.clone(),
            clean_sheets: p.clean_sheets,
            points: goalkeeper_points(p),
        })
        .collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}

/// Anyone with a goal or an assist.
pub fn player_table(players: &[FplPlayer]) -> Vec<PlayerRow> {
    let mut rows: Vec<PlayerRow> = players
        .iter()
        .filter(|p| p.goals_scored > 0 || p.assists > 0)
        .map(|p| PlayerRow {
            id: p.id,
            name: p.full_name(),
            web_name: p.web_name.clone(),
            goals_scored: p.goals_scored,
            assists: p.assists,
            points: player_points(p),
        })
        .collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}
