use chrono::Utc;
use squad_scorer::squad::{
    diff_roster, NewTransfer, Roster, RosterEntry, SlotKind, TransferAction,
};

fn entry(id: i32, name: &str) -> RosterEntry {
    RosterEntry::new(id, name, Utc::now())
}

fn players(ids: &[(i32, &str)]) -> Roster {
    Roster {
        players: ids.iter().map(|(id, name)| entry(*id, name)).collect(),
        ..Roster::default()
    }
}

fn summary(transfers: &[NewTransfer]) -> Vec<(SlotKind, i32, TransferAction)> {
    transfers
        .iter()
        .map(|t| (t.entry_type, t.entry_id, t.action))
        .collect()
}

#[test]
fn swapped_player_yields_one_removal_and_one_addition() {
    let old = players(&[(1, "A"), (2, "B"), (3, "C")]);
    let new = players(&[(2, "B"), (3, "C"), (4, "D")]);

    let transfers = diff_roster(7, "Squad", &old, &new);

    assert_eq!(
        summary(&transfers),
        vec![
            (SlotKind::Player, 1, TransferAction::Removed),
            (SlotKind::Player, 4, TransferAction::Added),
        ]
    );
    assert_eq!(transfers[0].entry_name, "A");
    assert_eq!(transfers[1].entry_name, "D");
}

#[test]
fn goalkeeper_swap_is_removed_then_added() {
    let old = Roster {
        goalkeeper: Some(entry(10, "G1")),
        ..Roster::default()
    };
    let new = Roster {
        goalkeeper: Some(entry(11, "G2")),
        ..Roster::default()
    };

    assert_eq!(
        summary(&diff_roster(1, "Squad", &old, &new)),
        vec![
            (SlotKind::Goalkeeper, 10, TransferAction::Removed),
            (SlotKind::Goalkeeper, 11, TransferAction::Added),
        ]
    );
}

#[test]
fn clearing_or_filling_goalkeeper_fires_one_side() {
    let with_gk = Roster {
        goalkeeper: Some(entry(10, "G1")),
        ..Roster::default()
    };
    let without = Roster::default();

    assert_eq!(
        summary(&diff_roster(1, "Squad", &with_gk, &without)),
        vec![(SlotKind::Goalkeeper, 10, TransferAction::Removed)]
    );
    assert_eq!(
        summary(&diff_roster(1, "Squad", &without, &with_gk)),
        vec![(SlotKind::Goalkeeper, 10, TransferAction::Added)]
    );
}

#[test]
fn unchanged_roster_produces_nothing() {
    let roster = Roster {
        goalkeeper: Some(entry(10, "G1")),
        teams: vec![entry(1, "Arsenal"), entry(14, "Liverpool")],
        players: vec![entry(2, "B"), entry(3, "C")],
    };
    assert!(diff_roster(1, "Squad", &roster, &roster.clone()).is_empty());
}

#[test]
fn reordering_is_not_a_transfer() {
    let old = Roster {
        teams: vec![entry(1, "Arsenal"), entry(14, "Liverpool")],
        ..Roster::default()
    };
    let new = Roster {
        teams: vec![entry(14, "Liverpool"), entry(1, "Arsenal")],
        ..Roster::default()
    };
    assert!(diff_roster(1, "Squad", &old, &new).is_empty());
}

#[test]
fn categories_are_diffed_independently() {
    // Same id in different slots must not cancel out.
    let old = Roster {
        teams: vec![entry(5, "Chelsea")],
        ..Roster::default()
    };
    let new = players(&[(5, "Someone")]);

    assert_eq!(
        summary(&diff_roster(1, "Squad", &old, &new)),
        vec![
            (SlotKind::Team, 5, TransferAction::Removed),
            (SlotKind::Player, 5, TransferAction::Added),
        ]
    );
}

#[test]
fn every_record_carries_the_new_squad_name() {
    let old = players(&[(1, "A")]);
    let new = players(&[(2, "B")]);

    let transfers = diff_roster(42, "Renamed FC", &old, &new);

    assert_eq!(transfers.len(), 2);
    assert!(transfers
        .iter()
        .all(|t| t.squad_id == 42 && t.squad_name == "Renamed FC"));
}
