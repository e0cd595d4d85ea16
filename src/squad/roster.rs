//! Incoming roster payloads: lenient parsing, de-duplication and slot limits.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult};
use crate::squad::types::{Roster, RosterEntry, SlotKind};

/// Upper bounds on slot counts after de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLimits {
    pub max_teams: usize,
    pub max_players: usize,
}

impl Default for RosterLimits {
    fn default() -> Self {
        RosterLimits {
            max_teams: 2,
            max_players: 3,
        }
    }
}

/// One slot as sent by a client. An unset goalkeeper arrives as `id: 0`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPayload {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub added_date: Option<DateTime<Utc>>,
}

impl EntryPayload {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        EntryPayload {
            id,
            name: name.into(),
            added_date: None,
        }
    }
}

/// Body of squad create / update requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPayload {
    pub name: String,
    #[serde(default)]
    pub goalkeeper: Option<EntryPayload>,
    pub teams: Vec<EntryPayload>,
    pub players: Vec<EntryPayload>,
}

/// A validated payload ready to be diffed and persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRoster {
    pub name: String,
    pub roster: Roster,
}

// Empty strings show up for never-set dates; treat them as absent.
fn lenient_date<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(d)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}

fn to_entry(
    kind: SlotKind,
    p: &EntryPayload,
    previous: &[&RosterEntry],
    now: DateTime<Utc>,
) -> AppResult<RosterEntry> {
    if p.id <= 0 {
        return Err(AppError::Validation(format!(
            "{} entry has invalid id {}",
            kind.as_str(),
            p.id
        )));
    }
    let name = p.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(format!(
            "{} {} is missing a name",
            kind.as_str(),
            p.id
        )));
    }

    // Retained entries keep their original date unless the client sent one.
    let added_date = p
        .added_date
        .or_else(|| previous.iter().find(|e| e.id == p.id).map(|e| e.added_date))
        .unwrap_or(now);

    Ok(RosterEntry::new(p.id, name, added_date))
}

fn dedup_entries(
    kind: SlotKind,
    payloads: &[EntryPayload],
    previous: &[&RosterEntry],
    now: DateTime<Utc>,
) -> AppResult<Vec<RosterEntry>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(payloads.len());
    for p in payloads {
        let entry = to_entry(kind, p, previous, now)?;
        if seen.insert(entry.id) {
            out.push(entry);
        }
    }
    Ok(out)
}

/// Validate a payload and turn it into a roster. `previous` is the stored
/// roster when updating, used to carry `added_date` forward.
pub fn normalize(
    payload: &RosterPayload,
    previous: Option<&Roster>,
    limits: RosterLimits,
    now: DateTime<Utc>,
) -> AppResult<NormalizedRoster> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("squad name must not be empty".into()));
    }

    let empty = Roster::default();
    let prev = previous.unwrap_or(&empty);

    let goalkeeper = match &payload.goalkeeper {
        Some(p) if p.id != 0 => Some(to_entry(
            SlotKind::Goalkeeper,
            p,
            &prev.entries(SlotKind::Goalkeeper),
            now,
        )?),
        _ => None,
    };
    let teams = dedup_entries(SlotKind::Team, &payload.teams, &prev.entries(SlotKind::Team), now)?;
    let players = dedup_entries(
        SlotKind::Player,
        &payload.players,
        &prev.entries(SlotKind::Player),
        now,
    )?;

    if teams.len() > limits.max_teams {
        return Err(AppError::Validation(format!(
            "at most {} teams allowed, got {}",
            limits.max_teams,
            teams.len()
        )));
    }
    if players.len() > limits.max_players {
        return Err(AppError::Validation(format!(
            "at most {} players allowed, got {}",
            limits.max_players,
            players.len()
        )));
    }

    Ok(NormalizedRoster {
        name: name.to_string(),
        roster: Roster {
            goalkeeper,
            teams,
            players,
        },
    })
}
