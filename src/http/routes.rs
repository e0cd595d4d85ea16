use actix_web::web;

use crate::error::AppError;
use crate::http;

/// Malformed JSON bodies surface as validation errors, not actix's plain 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

/// Mount every HTTP sub-module under `/api`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .configure(http::health::init_routes)
            .configure(http::setup::init_routes)
            .configure(http::squads::init_routes)
            .configure(http::leaderboard::init_routes)
            .configure(http::transfers::init_routes)
            .configure(http::feed::init_routes),
    );
}
