//! Squad CRUD. Updates go through the transactional roster replacement so
//! every change lands in the transfer ledger.

use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;

use crate::config::settings;
use crate::db::squad_repo;
use crate::error::AppResult;
use crate::squad::RosterPayload;

/// GET /api/squads
#[get("/squads")]
pub async fn list(db: web::Data<PgPool>) -> AppResult<HttpResponse> {
    let squads = squad_repo::list(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(squads))
}

/// POST /api/squads
#[post("/squads")]
pub async fn create(
    info: web::Json<RosterPayload>,
    db: web::Data<PgPool>,
) -> AppResult<HttpResponse> {
    let squad = squad_repo::create(db.get_ref(), &info, settings().limits()).await?;
    Ok(HttpResponse::Created().json(squad))
}

/// GET /api/squads/{id}
#[get("/squads/{id}")]
pub async fn find(path: web::Path<i32>, db: web::Data<PgPool>) -> AppResult<HttpResponse> {
    let squad = squad_repo::find(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(squad))
}

/// PUT /api/squads/{id}
#[put("/squads/{id}")]
pub async fn update(
    path: web::Path<i32>,
    info: web::Json<RosterPayload>,
    db: web::Data<PgPool>,
) -> AppResult<HttpResponse> {
    let update =
        squad_repo::apply_roster_update(db.get_ref(), path.into_inner(), &info, settings().limits())
            .await?;
    Ok(HttpResponse::Ok().json(update))
}

/// DELETE /api/squads/{id}
#[delete("/squads/{id}")]
pub async fn remove(path: web::Path<i32>, db: web::Data<PgPool>) -> AppResult<HttpResponse> {
    squad_repo::delete(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Squad deleted successfully" })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(find)
        .service(update)
        .service(remove);
}
