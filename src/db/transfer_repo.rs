//! Append-only transfer ledger: rows are inserted, never updated or deleted.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::db::models::TransferRow;
use crate::error::AppResult;
use crate::squad::{NewTransfer, Transfer};

const TRANSFER_COLUMNS: &str =
    "id, squad_id, squad_name, entry_type, entry_id, entry_name, action, created_at";

/// Insert every record with the same timestamp, inside the caller's
/// transaction, and return them as stored.
pub async fn append_many(
    conn: &mut PgConnection,
    transfers: &[NewTransfer],
    at: DateTime<Utc>,
) -> AppResult<Vec<Transfer>> {
    let mut stored = Vec::with_capacity(transfers.len());
    for t in transfers {
        let row = sqlx::query_as::<_, TransferRow>(&format!(
            r#"INSERT INTO transfers
                   (squad_id, squad_name, entry_type, entry_id, entry_name, action, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {TRANSFER_COLUMNS}"#
        ))
        .bind(t.squad_id)
        .bind(&t.squad_name)
        .bind(t.entry_type.as_str())
        .bind(t.entry_id)
        .bind(&t.entry_name)
        .bind(t.action.as_str())
        .bind(at)
        .fetch_one(&mut *conn)
        .await?;
        stored.push(Transfer::try_from(row)?);
    }
    Ok(stored)
}

/// Newest first, optionally for a single squad.
pub async fn list(db: &PgPool, squad_id: Option<i32>) -> AppResult<Vec<Transfer>> {
    let rows = sqlx::query_as::<_, TransferRow>(&format!(
        r#"SELECT {TRANSFER_COLUMNS}
             FROM transfers
            WHERE $1::INTEGER IS NULL OR squad_id = $1
            ORDER BY created_at DESC, id DESC"#
    ))
    .bind(squad_id)
    .fetch_all(db)
    .await?;

    rows.into_iter().map(Transfer::try_from).collect()
}
