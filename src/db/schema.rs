//! Idempotent schema bootstrap, run at start-up and by `POST /api/setup`.

use sqlx::PgPool;

use crate::error::AppResult;

const SCHEMA_LOCK_KEY: i64 = 0x5351_5541_4453;

const STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS squads (
           id          SERIAL PRIMARY KEY,
           name        TEXT        NOT NULL,
           created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
           updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
       )"#,
    r#"CREATE TABLE IF NOT EXISTS roster_entries (
           squad_id  INTEGER     NOT NULL REFERENCES squads(id) ON DELETE CASCADE,
           slot      TEXT        NOT NULL CHECK (slot IN ('goalkeeper', 'team', 'player')),
           fpl_id    INTEGER     NOT NULL,
           name      TEXT        NOT NULL,
           added_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
           position  INTEGER     NOT NULL DEFAULT 0,
           PRIMARY KEY (squad_id, slot, fpl_id)
       )"#,
    r#"CREATE UNIQUE INDEX IF NOT EXISTS roster_entries_one_goalkeeper
           ON roster_entries (squad_id) WHERE slot = 'goalkeeper'"#,
    // No FK to squads: the ledger outlives deleted squads.
    r#"CREATE TABLE IF NOT EXISTS transfers (
           id          SERIAL PRIMARY KEY,
           squad_id    INTEGER     NOT NULL,
           squad_name  TEXT        NOT NULL,
           entry_type  TEXT        NOT NULL CHECK (entry_type IN ('goalkeeper', 'team', 'player')),
           entry_id    INTEGER     NOT NULL,
           entry_name  TEXT        NOT NULL,
           action      TEXT        NOT NULL CHECK (action IN ('added', 'removed')),
           created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
       )"#,
    r#"CREATE INDEX IF NOT EXISTS transfers_created_at ON transfers (created_at DESC, id DESC)"#,
];

/// Create every table and index the service needs, in one transaction.
pub async fn ensure_schema(db: &PgPool) -> AppResult<()> {
    let mut tx = db.begin().await?;
    // Serialise concurrent bootstraps; IF NOT EXISTS alone races on pg_type.
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    for stmt in STATEMENTS {
        sqlx::query(stmt).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    log::info!("database schema ready");
    Ok(())
}
