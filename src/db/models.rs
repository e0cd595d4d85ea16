use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::error::AppError;
use crate::squad::{RosterEntry, SlotKind, Transfer, TransferAction};

#[derive(Debug, FromRow)]
pub struct SquadRow {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct RosterRow {
    pub squad_id: i32,
    pub slot: String,
    pub fpl_id: i32,
    pub name: String,
    pub added_at: DateTime<Utc>,
    pub position: i32,
}

impl RosterRow {
    pub fn slot_kind(&self) -> Result<SlotKind, AppError> {
        SlotKind::parse(&self.slot).ok_or_else(|| {
            AppError::StorageFailure(format!("unknown roster slot '{}'", self.slot))
        })
    }

    pub fn into_entry(self) -> RosterEntry {
        RosterEntry::new(self.fpl_id, self.name, self.added_at)
    }
}

#[derive(Debug, FromRow)]
pub struct TransferRow {
    pub id: i32,
    pub squad_id: i32,
    pub squad_name: String,
    pub entry_type: String,
    pub entry_id: i32,
    pub entry_name: String,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<TransferRow> for Transfer {
    type Error = AppError;

    fn try_from(r: TransferRow) -> Result<Self, Self::Error> {
        let entry_type = SlotKind::parse(&r.entry_type).ok_or_else(|| {
            AppError::StorageFailure(format!("unknown transfer type '{}'", r.entry_type))
        })?;
        let action = TransferAction::parse(&r.action).ok_or_else(|| {
            AppError::StorageFailure(format!("unknown transfer action '{}'", r.action))
        })?;
        Ok(Transfer {
            id: r.id,
            squad_id: r.squad_id,
            squad_name: r.squad_name,
            entry_type,
            entry_id: r.entry_id,
            entry_name: r.entry_name,
            action,
            date: r.created_at,
        })
    }
}
