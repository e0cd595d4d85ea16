use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::db::schema;
use crate::error::AppResult;

/// POST /api/setup
#[post("/setup")]
pub async fn setup(db: web::Data<PgPool>) -> AppResult<HttpResponse> {
    schema::ensure_schema(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Database setup completed successfully"
    })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(setup);
}
