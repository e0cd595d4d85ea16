//! Roster diff: which entries left and which joined between two rosters.

use std::collections::HashSet;

use crate::squad::types::{NewTransfer, Roster, RosterEntry, SlotKind, TransferAction};

fn transfer(
    squad_id: i32,
    squad_name: &str,
    kind: SlotKind,
    entry: &RosterEntry,
    action: TransferAction,
) -> NewTransfer {
    NewTransfer {
        squad_id,
        squad_name: squad_name.to_string(),
        entry_type: kind,
        entry_id: entry.id,
        entry_name: entry.name.clone(),
        action,
    }
}

/// Set difference on ids: removals in old order, then additions in new order.
fn diff_set(
    squad_id: i32,
    squad_name: &str,
    kind: SlotKind,
    old: &[RosterEntry],
    new: &[RosterEntry],
    out: &mut Vec<NewTransfer>,
) {
    let old_ids: HashSet<i32> = old.iter().map(|e| e.id).collect();
    let new_ids: HashSet<i32> = new.iter().map(|e| e.id).collect();

    for e in old.iter().filter(|e| !new_ids.contains(&e.id)) {
        out.push(transfer(squad_id, squad_name, kind, e, TransferAction::Removed));
    }
    for e in new.iter().filter(|e| !old_ids.contains(&e.id)) {
        out.push(transfer(squad_id, squad_name, kind, e, TransferAction::Added));
    }
}

/// Transfers implied by replacing `old` with `new`. `squad_name` is the
/// post-update name and is stamped onto every record.
pub fn diff_roster(squad_id: i32, squad_name: &str, old: &Roster, new: &Roster) -> Vec<NewTransfer> {
    let mut out = Vec::new();

    // Goalkeeper is a singleton slot: a swap yields one removal and one addition.
    let old_gk = old.goalkeeper.as_ref();
    let new_gk = new.goalkeeper.as_ref();
    let same_gk = matches!((old_gk, new_gk), (Some(a), Some(b)) if a.id == b.id);
    if !same_gk {
        if let Some(gk) = old_gk {
            out.push(transfer(
                squad_id,
                squad_name,
                SlotKind::Goalkeeper,
                gk,
                TransferAction::Removed,
            ));
        }
        if let Some(gk) = new_gk {
            out.push(transfer(
                squad_id,
                squad_name,
                SlotKind::Goalkeeper,
                gk,
                TransferAction::Added,
            ));
        }
    }

    diff_set(squad_id, squad_name, SlotKind::Team, &old.teams, &new.teams, &mut out);
    diff_set(squad_id, squad_name, SlotKind::Player, &old.players, &new.players, &mut out);
    out
}
