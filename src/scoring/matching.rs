//! Resolve stored roster entries against the current feed.
//!
//! The FPL id is the join key. Name matching only kicks in when the id is
//! gone from the feed (or was never stored), and every fallback is logged.

use crate::fpl::{Fixture, FplPlayer, FplTeam};
use crate::squad::RosterEntry;

/// Exact case-insensitive match on any candidate name, then substring
/// containment in either direction.
fn match_by_name<'a, T, F>(items: &'a [T], name: &str, names: F) -> Option<&'a T>
where
    F: Fn(&T) -> [String; 2],
{
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let candidates = |item: &T| {
        names(item)
            .into_iter()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
    };

    items
        .iter()
        .find(|item| candidates(*item).iter().any(|n| *n == needle))
        .or_else(|| {
            items.iter().find(|item| {
                candidates(*item)
                    .iter()
                    .any(|n| n.contains(&needle) || needle.contains(n.as_str()))
            })
        })
}

pub fn find_player_by_name<'a>(players: &'a [FplPlayer], name: &str) -> Option<&'a FplPlayer> {
    match_by_name(players, name, |p| [p.full_name(), p.web_name.clone()])
}

pub fn find_team_by_name<'a>(teams: &'a [FplTeam], name: &str) -> Option<&'a FplTeam> {
    match_by_name(teams, name, |t| [t.name.clone(), t.short_name.clone()])
}

/// Feed record for a stored player or goalkeeper slot.
pub fn resolve_player<'a>(players: &'a [FplPlayer], entry: &RosterEntry) -> Option<&'a FplPlayer> {
    if let Some(p) = players.iter().find(|p| p.id == entry.id) {
        return Some(p);
    }
    match find_player_by_name(players, &entry.name) {
        Some(p) => {
            log::warn!(
                "player {} ({}) not in feed by id; matched by name to {} ({})",
                entry.id,
                entry.name,
                p.id,
                p.web_name
            );
            Some(p)
        }
        None => {
            log::warn!("player {} ({}) not found in feed", entry.id, entry.name);
            None
        }
    }
}

/// Feed team id for a stored team slot.
pub fn resolve_team_id(teams: &[FplTeam], fixtures: &[Fixture], entry: &RosterEntry) -> Option<i32> {
    let known = teams.iter().any(|t| t.id == entry.id)
        || fixtures
            .iter()
            .any(|f| f.team_h == entry.id || f.team_a == entry.id);
    if known {
        return Some(entry.id);
    }
    match find_team_by_name(teams, &entry.name) {
        Some(t) => {
            log::warn!(
                "team {} ({}) not in feed by id; matched by name to {}",
                entry.id,
                entry.name,
                t.id
            );
            Some(t.id)
        }
        None => {
            log::warn!("team {} ({}) not found in feed", entry.id, entry.name);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: i32, first: &str, second: &str, web: &str) -> FplPlayer {
        FplPlayer {
            id,
            web_name: web.into(),
            first_name: first.into(),
            second_name: second.into(),
            element_type: 3,
            team: 0,
            total_points: 0,
            clean_sheets: 0,
            goals_scored: 0,
            assists: 0,
        }
    }

    #[test]
    fn exact_match_beats_substring() {
        let players = vec![
            player(1, "Gabriel", "Martinelli Silva", "Martinelli"),
            player(2, "Gabriel", "dos Santos Magalhães", "Gabriel"),
        ];
        assert_eq!(find_player_by_name(&players, "gabriel").map(|p| p.id), Some(2));
    }

    #[test]
    fn substring_matches_either_direction() {
        let players = vec![player(7, "Mohamed", "Salah", "M.Salah")];
        assert_eq!(find_player_by_name(&players, "Salah").map(|p| p.id), Some(7));
        assert_eq!(
            find_player_by_name(&players, "Mohamed Salah Hamed").map(|p| p.id),
            Some(7)
        );
    }

    #[test]
    fn blank_name_never_matches() {
        let players = vec![player(7, "Mohamed", "Salah", "M.Salah")];
        assert!(find_player_by_name(&players, "  ").is_none());
    }
}
