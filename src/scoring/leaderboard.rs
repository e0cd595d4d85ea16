use serde::Serialize;

use crate::fpl::StatsSnapshot;
use crate::scoring::engine::{score, ScoreBreakdown};
use crate::squad::Squad;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSquad {
    pub rank: usize,
    #[serde(flatten)]
    pub squad: Squad,
    pub points: ScoreBreakdown,
}

/// Score every squad and order by total, highest first. Ties keep their
/// input order.
pub fn leaderboard(squads: Vec<Squad>, snapshot: &StatsSnapshot) -> Vec<RankedSquad> {
    let mut scored: Vec<(Squad, ScoreBreakdown)> = squads
        .into_iter()
        .map(|squad| {
            let points = score(&squad, snapshot);
            (squad, points)
        })
        .collect();
    scored.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (squad, points))| RankedSquad {
            rank: i + 1,
            squad,
            points,
        })
        .collect()
}
