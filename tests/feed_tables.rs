//! League tables and the squad leaderboard.

use chrono::{TimeZone, Utc};
use squad_scorer::fpl::{Fixture, FplPlayer, FplTeam, StatsSnapshot};
use squad_scorer::scoring::{goalkeeper_table, leaderboard, player_table, team_records};
use squad_scorer::squad::{Roster, RosterEntry, Squad};

fn player(id: i32, web: &str, element_type: u8, cs: u32, goals: u32, assists: u32) -> FplPlayer {
    FplPlayer {
        id,
        web_name: web.into(),
        first_name: web.into(),
        second_name: "X".into(),
        element_type,
        team: 0,
        total_points: 0,
        clean_sheets: cs,
        goals_scored: goals,
        assists,
    }
}

fn fixture(id: i32, h: i32, a: i32, hs: u32, as_: u32) -> Fixture {
    Fixture {
        id,
        team_h: h,
        team_a: a,
        team_h_score: Some(hs),
        team_a_score: Some(as_),
        finished: true,
        event: Some(1),
    }
}

fn team(id: i32, name: &str) -> FplTeam {
    FplTeam {
        id,
        name: name.into(),
        short_name: String::new(),
    }
}

fn snapshot() -> StatsSnapshot {
    StatsSnapshot {
        players: vec![
            player(1, "Raya", 1, 3, 0, 0),
            player(2, "Pickford", 1, 0, 0, 0),
            player(3, "Sels", 1, 5, 0, 0),
            player(4, "Saka", 3, 0, 2, 1),
            player(5, "Isak", 4, 0, 4, 0),
            player(6, "Benched", 2, 0, 0, 0),
        ],
        teams: vec![team(1, "Arsenal"), team(2, "Everton"), team(3, "Southampton")],
        fixtures: vec![
            fixture(1, 1, 2, 3, 0),
            fixture(2, 2, 3, 1, 1),
            fixture(3, 3, 1, 2, 1),
        ],
    }
}

fn squad(id: i32, roster: Roster) -> Squad {
    let at = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
    Squad {
        id,
        name: format!("Squad {id}"),
        roster,
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn team_records_count_both_sides_and_sort_by_points() {
    let records = team_records(&snapshot());

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    // Southampton: W1 D1, 3 GF → 20 × 1.25 = 25
    // Arsenal:     W1 L1, 4 GF → 18 × 0.8  = 14.4 → 14
    // Everton:     D1 L1, 1 GF →  6
    assert_eq!(names, vec!["Southampton", "Arsenal", "Everton"]);

    let saints = &records[0];
    assert_eq!(saints.fantasy_points, 25);
    assert_eq!((saints.record.wins, saints.record.draws, saints.record.losses), (1, 1, 0));
    assert_eq!(saints.multiplier, 1.25);

    let arsenal = &records[1];
    assert_eq!(arsenal.fantasy_points, 14);
    assert_eq!(arsenal.record.goals_against, 2);
    assert_eq!(arsenal.record.clean_sheets, 1);
}

#[test]
fn goalkeeper_table_lists_keepers_with_clean_sheets() {
    let rows = goalkeeper_table(&snapshot().players);
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(rows[0].points, 125);
}

#[test]
fn player_table_lists_goal_involvements() {
    let rows = player_table(&snapshot().players);
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 4]);
    assert_eq!(rows[0].points, 48);
    assert_eq!(rows[1].points, 36);
}

#[test]
fn leaderboard_ranks_by_total_and_keeps_ties_in_order() {
    let at = Utc::now();
    let squads = vec![
        squad(1, Roster::default()),
        squad(
            2,
            Roster {
                players: vec![RosterEntry::new(5, "Isak", at)],
                ..Roster::default()
            },
        ),
        squad(3, Roster::default()),
        squad(
            4,
            Roster {
                goalkeeper: Some(RosterEntry::new(3, "Sels", at)),
                ..Roster::default()
            },
        ),
    ];

    let ranked = leaderboard(squads, &snapshot());

    let order: Vec<(usize, i32, i64)> = ranked
        .iter()
        .map(|r| (r.rank, r.squad.id, r.points.total))
        .collect();
    assert_eq!(order, vec![(1, 4, 125), (2, 2, 48), (3, 1, 0), (4, 3, 0)]);
}
