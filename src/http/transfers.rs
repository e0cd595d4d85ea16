use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::transfer_repo;
use crate::error::AppResult;

#[derive(Deserialize)]
pub struct TransferQuery {
    /// Restrict the ledger to one squad.
    pub squad_id: Option<i32>,
}

/// GET /api/transfers
#[get("/transfers")]
pub async fn list(
    db: web::Data<PgPool>,
    web::Query(query): web::Query<TransferQuery>,
) -> AppResult<HttpResponse> {
    let transfers = transfer_repo::list(db.get_ref(), query.squad_id).await?;
    Ok(HttpResponse::Ok().json(transfers))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list);
}
