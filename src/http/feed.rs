//! FPL pass-through endpoints and the league tables derived from them.

use actix_web::{get, web, HttpResponse};

use crate::cache::SnapshotCache;
use crate::error::AppResult;
use crate::fpl::{Bootstrap, FplClient};
use crate::scoring::{goalkeeper_table, player_table, team_records};

/// GET /api/fpl/bootstrap (players and teams only)
#[get("/fpl/bootstrap")]
pub async fn bootstrap(
    fpl: web::Data<FplClient>,
    cache: web::Data<SnapshotCache>,
) -> AppResult<HttpResponse> {
    let snapshot = cache.get_or_fetch(&fpl).await?;
    Ok(HttpResponse::Ok().json(Bootstrap {
        elements: snapshot.players.clone(),
        teams: snapshot.teams.clone(),
    }))
}

/// GET /api/fpl/fixtures
#[get("/fpl/fixtures")]
pub async fn fixtures(
    fpl: web::Data<FplClient>,
    cache: web::Data<SnapshotCache>,
) -> AppResult<HttpResponse> {
    let snapshot = cache.get_or_fetch(&fpl).await?;
    Ok(HttpResponse::Ok().json(&snapshot.fixtures))
}

/// GET /api/team-records
#[get("/team-records")]
pub async fn records(
    fpl: web::Data<FplClient>,
    cache: web::Data<SnapshotCache>,
) -> AppResult<HttpResponse> {
    let snapshot = cache.get_or_fetch(&fpl).await?;
    Ok(HttpResponse::Ok().json(team_records(&snapshot)))
}

/// GET /api/goalkeepers
#[get("/goalkeepers")]
pub async fn goalkeepers(
    fpl: web::Data<FplClient>,
    cache: web::Data<SnapshotCache>,
) -> AppResult<HttpResponse> {
    let snapshot = cache.get_or_fetch(&fpl).await?;
    Ok(HttpResponse::Ok().json(goalkeeper_table(&snapshot.players)))
}

/// GET /api/players
#[get("/players")]
pub async fn players(
    fpl: web::Data<FplClient>,
    cache: web::Data<SnapshotCache>,
) -> AppResult<HttpResponse> {
    let snapshot = cache.get_or_fetch(&fpl).await?;
    Ok(HttpResponse::Ok().json(player_table(&snapshot.players)))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(bootstrap)
        .service(fixtures)
        .service(records)
        .service(goalkeepers)
        .service(players);
}
