//! Squad points against the live FPL snapshot.

use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::cache::SnapshotCache;
use crate::db::squad_repo;
use crate::error::AppResult;
use crate::fpl::FplClient;
use crate::scoring::{leaderboard, score, ScoreBreakdown};
use crate::squad::Squad;

#[derive(Deserialize)]
pub struct LeaderboardParams {
    /// Maximum number of entries to return.
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct ScoredSquad {
    #[serde(flatten)]
    pub squad: Squad,
    pub points: ScoreBreakdown,
}

/// GET /api/squads/{id}/score
#[get("/squads/{id}/score")]
pub async fn squad_score(
    path: web::Path<i32>,
    db: web::Data<PgPool>,
    fpl: web::Data<FplClient>,
    cache: web::Data<SnapshotCache>,
) -> AppResult<HttpResponse> {
    let squad = squad_repo::find(db.get_ref(), path.into_inner()).await?;
    let snapshot = cache.get_or_fetch(&fpl).await?;
    let points = score(&squad, &snapshot);
    Ok(HttpResponse::Ok().json(ScoredSquad { squad, points }))
}

/// GET /api/leaderboard
#[get("/leaderboard")]
pub async fn ranking(
    db: web::Data<PgPool>,
    fpl: web::Data<FplClient>,
    cache: web::Data<SnapshotCache>,
    web::Query(params): web::Query<LeaderboardParams>,
) -> AppResult<HttpResponse> {
    let squads = squad_repo::list(db.get_ref()).await?;
    let snapshot = cache.get_or_fetch(&fpl).await?;

    let mut rows = leaderboard(squads, &snapshot);
    if let Some(limit) = params.limit {
        rows.truncate(limit);
    }
    Ok(HttpResponse::Ok().json(rows))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(squad_score).service(ranking);
}
