use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which roster slot an entry (or a transfer) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Goalkeeper,
    Team,
    Player,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Goalkeeper => "goalkeeper",
            SlotKind::Team => "team",
            SlotKind::Player => "player",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "goalkeeper" => Some(SlotKind::Goalkeeper),
            "team" => Some(SlotKind::Team),
            "player" => Some(SlotKind::Player),
            _ => None,
        }
    }
}

/// One goalkeeper / team / player slot. `id` lives in the FPL id space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: i32,
    pub name: String,
    pub added_date: DateTime<Utc>,
}

impl RosterEntry {
    pub fn new(id: i32, name: impl Into<String>, added_date: DateTime<Utc>) -> Self {
        RosterEntry {
            id,
            name: name.into(),
            added_date,
        }
    }
}

/// The composition of a squad, independent of its persisted identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub goalkeeper: Option<RosterEntry>,
    pub teams: Vec<RosterEntry>,
    pub players: Vec<RosterEntry>,
}

impl Roster {
    /// Entries of one slot kind, in stored order.
    pub fn entries(&self, kind: SlotKind) -> Vec<&RosterEntry> {
        match kind {
            SlotKind::Goalkeeper => self.goalkeeper.iter().collect(),
            SlotKind::Team => self.teams.iter().collect(),
            SlotKind::Player => self.players.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Squad {
    pub id: i32,
    pub name: String,
    #[serde(flatten)]
    pub roster: Roster,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferAction {
    Added,
    Removed,
}

impl TransferAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferAction::Added => "added",
            TransferAction::Removed => "removed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "added" => Some(TransferAction::Added),
            "removed" => Some(TransferAction::Removed),
            _ => None,
        }
    }
}

/// A transfer computed by the roster diff but not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransfer {
    pub squad_id: i32,
    pub squad_name: String,
    pub entry_type: SlotKind,
    pub entry_id: i32,
    pub entry_name: String,
    pub action: TransferAction,
}

/// Append-only audit record, as read back from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: i32,
    pub squad_id: i32,
    pub squad_name: String,
    #[serde(rename = "type")]
    pub entry_type: SlotKind,
    #[serde(rename = "playerId")]
    pub entry_id: i32,
    #[serde(rename = "playerName")]
    pub entry_name: String,
    pub action: TransferAction,
    pub date: DateTime<Utc>,
}
