//! Squad persistence: CRUD plus the transactional roster replacement that
//! feeds the transfer ledger.

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::db::models::{RosterRow, SquadRow};
use crate::db::transfer_repo;
use crate::error::{AppError, AppResult};
use crate::squad::{
    diff_roster, normalize, NormalizedRoster, Roster, RosterLimits, RosterPayload, SlotKind, Squad,
    Transfer,
};

const SQUAD_COLUMNS: &str = "id, name, created_at, updated_at";
const ROSTER_COLUMNS: &str = "squad_id, slot, fpl_id, name, added_at, position";

/// Result of a roster update: the squad as now stored and the ledger rows
/// written alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterUpdate {
    #[serde(flatten)]
    pub squad: Squad,
    pub transfers: Vec<Transfer>,
}

fn assemble(row: SquadRow, entries: Vec<RosterRow>) -> AppResult<Squad> {
    let mut roster = Roster::default();
    for entry in entries {
        match entry.slot_kind()? {
            SlotKind::Goalkeeper => roster.goalkeeper = Some(entry.into_entry()),
            SlotKind::Team => roster.teams.push(entry.into_entry()),
            SlotKind::Player => roster.players.push(entry.into_entry()),
        }
    }
    Ok(Squad {
        id: row.id,
        name: row.name,
        roster,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

async fn load_roster(conn: &mut PgConnection, squad_id: i32) -> AppResult<Vec<RosterRow>> {
    let rows = sqlx::query_as::<_, RosterRow>(&format!(
        "SELECT {ROSTER_COLUMNS} FROM roster_entries WHERE squad_id = $1 ORDER BY position"
    ))
    .bind(squad_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Load one squad with its roster. `for_update` row-locks the squad so
/// concurrent roster updates on it queue behind each other.
async fn find_in(conn: &mut PgConnection, id: i32, for_update: bool) -> AppResult<Squad> {
    let lock = if for_update { " FOR UPDATE" } else { "" };
    let row = sqlx::query_as::<_, SquadRow>(&format!(
        "SELECT {SQUAD_COLUMNS} FROM squads WHERE id = $1{lock}"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("squad {id}")))?;

    let entries = load_roster(conn, id).await?;
    assemble(row, entries)
}

async fn insert_roster(conn: &mut PgConnection, squad_id: i32, roster: &Roster) -> AppResult<()> {
    for kind in [SlotKind::Goalkeeper, SlotKind::Team, SlotKind::Player] {
        for (position, entry) in roster.entries(kind).into_iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO roster_entries (squad_id, slot, fpl_id, name, added_at, position)
                   VALUES ($1, $2, $3, $4, $5, $6)"#,
            )
            .bind(squad_id)
            .bind(kind.as_str())
            .bind(entry.id)
            .bind(&entry.name)
            .bind(entry.added_date)
            .bind(position as i32)
            .execute(&mut *conn)
            .await?;
        }
    }
    Ok(())
}

/// Read-only transaction pinned to one snapshot: a squad row and its roster
/// rows read through it always come from the same commit.
async fn begin_snapshot(db: &PgPool) -> AppResult<Transaction<'static, Postgres>> {
    let mut tx = db.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

/// Every squad with its roster, newest first.
pub async fn list(db: &PgPool) -> AppResult<Vec<Squad>> {
    let mut tx = begin_snapshot(db).await?;

    let squads = sqlx::query_as::<_, SquadRow>(&format!(
        "SELECT {SQUAD_COLUMNS} FROM squads ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(&mut *tx)
    .await?;

    let entries = sqlx::query_as::<_, RosterRow>(&format!(
        "SELECT {ROSTER_COLUMNS} FROM roster_entries ORDER BY squad_id, position"
    ))
    .fetch_all(&mut *tx)
    .await?;
    tx.commit().await?;

    let mut by_squad: HashMap<i32, Vec<RosterRow>> = HashMap::new();
    for e in entries {
        by_squad.entry(e.squad_id).or_default().push(e);
    }

    squads
        .into_iter()
        .map(|row| {
            let entries = by_squad.remove(&row.id).unwrap_or_default();
            assemble(row, entries)
        })
        .collect()
}

pub async fn find(db: &PgPool, id: i32) -> AppResult<Squad> {
    let mut tx = begin_snapshot(db).await?;
    let squad = find_in(&mut tx, id, false).await?;
    tx.commit().await?;
    Ok(squad)
}

/// Validate and insert a new squad with its roster. Creation writes no
/// transfer rows.
pub async fn create(db: &PgPool, payload: &RosterPayload, limits: RosterLimits) -> AppResult<Squad> {
    let new = normalize(payload, None, limits, Utc::now())?;

    let mut tx = db.begin().await?;
    let id: i32 = sqlx::query_scalar("INSERT INTO squads (name) VALUES ($1) RETURNING id")
        .bind(&new.name)
        .fetch_one(&mut *tx)
        .await?;
    insert_roster(&mut tx, id, &new.roster).await?;
    let squad = find_in(&mut tx, id, false).await?;
    tx.commit().await?;

    log::info!("created squad {} ({})", squad.id, squad.name);
    Ok(squad)
}

/// Delete a squad; its roster goes with it, its transfer history stays.
pub async fn delete(db: &PgPool, id: i32) -> AppResult<()> {
    let rows = sqlx::query("DELETE FROM squads WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    if rows == 0 {
        return Err(AppError::NotFound(format!("squad {id}")));
    }
    log::info!("deleted squad {id}");
    Ok(())
}

/// Replace a squad's name and roster and record the transfers, atomically.
pub async fn apply_roster_update(
    db: &PgPool,
    id: i32,
    payload: &RosterPayload,
    limits: RosterLimits,
) -> AppResult<RosterUpdate> {
    let mut tx = db.begin().await?;

    let old = find_in(&mut tx, id, true).await?;
    let new = normalize(payload, Some(&old.roster), limits, Utc::now())?;
    let update = replace_roster(&mut tx, &old, &new).await?;

    tx.commit().await?;
    log::info!(
        "squad {} updated: {} transfer(s) recorded",
        update.squad.id,
        update.transfers.len()
    );
    Ok(update)
}

/// The body of a roster update, run on the caller's transaction. Nothing is
/// visible to other connections until that transaction commits.
pub async fn replace_roster(
    conn: &mut PgConnection,
    old: &Squad,
    new: &NormalizedRoster,
) -> AppResult<RosterUpdate> {
    let pending = diff_roster(old.id, &new.name, &old.roster, &new.roster);
    let transfers = transfer_repo::append_many(conn, &pending, Utc::now()).await?;

    sqlx::query("DELETE FROM roster_entries WHERE squad_id = $1")
        .bind(old.id)
        .execute(&mut *conn)
        .await?;
    insert_roster(conn, old.id, &new.roster).await?;

    sqlx::query("UPDATE squads SET name = $2, updated_at = NOW() WHERE id = $1")
        .bind(old.id)
        .bind(&new.name)
        .execute(&mut *conn)
        .await?;

    let squad = find_in(conn, old.id, false).await?;
    Ok(RosterUpdate { squad, transfers })
}

/// Load and row-lock a squad on the caller's transaction, for callers that
/// run [`replace_roster`] themselves.
pub async fn lock_for_update(conn: &mut PgConnection, id: i32) -> AppResult<Squad> {
    find_in(conn, id, true).await
}
