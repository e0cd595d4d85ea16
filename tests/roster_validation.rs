use chrono::{TimeZone, Utc};
use squad_scorer::error::AppError;
use squad_scorer::squad::{
    normalize, EntryPayload, Roster, RosterEntry, RosterLimits, RosterPayload,
};

fn payload(gk: Option<EntryPayload>, teams: Vec<EntryPayload>, players: Vec<EntryPayload>) -> RosterPayload {
    RosterPayload {
        name: "Gaffer's XI".into(),
        goalkeeper: gk,
        teams,
        players,
    }
}

fn is_validation<T: std::fmt::Debug>(r: Result<T, AppError>) -> bool {
    matches!(r, Err(AppError::Validation(_)))
}

#[test]
fn duplicates_are_dropped_keeping_first() {
    let p = payload(
        None,
        vec![EntryPayload::new(1, "Arsenal"), EntryPayload::new(1, "Arsenal again")],
        vec![
            EntryPayload::new(5, "Saka"),
            EntryPayload::new(6, "Palmer"),
            EntryPayload::new(5, "Saka"),
        ],
    );

    let n = normalize(&p, None, RosterLimits::default(), Utc::now()).expect("valid");

    assert_eq!(n.roster.teams.len(), 1);
    assert_eq!(n.roster.teams[0].name, "Arsenal");
    let ids: Vec<i32> = n.roster.players.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![5, 6]);
}

#[test]
fn zero_id_goalkeeper_means_unset() {
    let p = payload(Some(EntryPayload::new(0, "")), vec![], vec![]);
    let n = normalize(&p, None, RosterLimits::default(), Utc::now()).expect("valid");
    assert!(n.roster.goalkeeper.is_none());
}

#[test]
fn names_are_trimmed() {
    let mut p = payload(Some(EntryPayload::new(1, "  Raya ")), vec![], vec![]);
    p.name = "  Spaced Out  ".into();
    let n = normalize(&p, None, RosterLimits::default(), Utc::now()).expect("valid");
    assert_eq!(n.name, "Spaced Out");
    assert_eq!(n.roster.goalkeeper.map(|g| g.name).as_deref(), Some("Raya"));
}

#[test]
fn rejects_blank_squad_name() {
    let mut p = payload(None, vec![], vec![]);
    p.name = "   ".into();
    assert!(is_validation(normalize(&p, None, RosterLimits::default(), Utc::now())));
}

#[test]
fn rejects_entries_without_id_or_name() {
    let no_id = payload(None, vec![EntryPayload::new(0, "Arsenal")], vec![]);
    assert!(is_validation(normalize(&no_id, None, RosterLimits::default(), Utc::now())));

    let no_name = payload(None, vec![], vec![EntryPayload::new(3, " ")]);
    assert!(is_validation(normalize(&no_name, None, RosterLimits::default(), Utc::now())));

    let negative_gk = payload(Some(EntryPayload::new(-4, "Raya")), vec![], vec![]);
    assert!(is_validation(normalize(&negative_gk, None, RosterLimits::default(), Utc::now())));
}

#[test]
fn enforces_slot_limits_after_dedup() {
    let limits = RosterLimits {
        max_teams: 2,
        max_players: 3,
    };
    let too_many_teams = payload(
        None,
        vec![
            EntryPayload::new(1, "Arsenal"),
            EntryPayload::new(2, "Aston Villa"),
            EntryPayload::new(3, "Bournemouth"),
        ],
        vec![],
    );
    assert!(is_validation(normalize(&too_many_teams, None, limits, Utc::now())));

    // Four rows but only three distinct players: fine.
    let dup_players = payload(
        None,
        vec![],
        vec![
            EntryPayload::new(5, "Saka"),
            EntryPayload::new(6, "Palmer"),
            EntryPayload::new(7, "Isak"),
            EntryPayload::new(7, "Isak"),
        ],
    );
    assert!(normalize(&dup_players, None, limits, Utc::now()).is_ok());
}

#[test]
fn retained_entries_keep_their_added_date() {
    let then = Utc.with_ymd_and_hms(2024, 8, 16, 19, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 12, 1, 12, 0, 0).unwrap();
    let previous = Roster {
        players: vec![RosterEntry::new(5, "Saka", then)],
        ..Roster::default()
    };

    let p = payload(
        None,
        vec![],
        vec![EntryPayload::new(5, "Saka"), EntryPayload::new(6, "Palmer")],
    );
    let n = normalize(&p, Some(&previous), RosterLimits::default(), now).expect("valid");

    assert_eq!(n.roster.players[0].added_date, then);
    assert_eq!(n.roster.players[1].added_date, now);
}

#[test]
fn payload_accepts_client_json() {
    let json = r#"{
        "name": "Form XI",
        "goalkeeper": { "id": 0, "name": "", "addedDate": "" },
        "teams": [ { "id": 1, "name": "Arsenal", "addedDate": "2024-08-16T19:00:00.000Z" } ],
        "players": [ { "id": 5, "name": "Saka" } ]
    }"#;

    let p: RosterPayload = serde_json::from_str(json).expect("parses");
    let n = normalize(&p, None, RosterLimits::default(), Utc::now()).expect("valid");

    assert!(n.roster.goalkeeper.is_none());
    assert_eq!(
        n.roster.teams[0].added_date,
        Utc.with_ymd_and_hms(2024, 8, 16, 19, 0, 0).unwrap()
    );
}

#[test]
fn payload_without_roster_lists_is_rejected() {
    let json = r#"{ "name": "Half a squad" }"#;
    assert!(serde_json::from_str::<RosterPayload>(json).is_err());
}
