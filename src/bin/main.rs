use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use squad_scorer::{
    cache::SnapshotCache, config::settings, db::schema, fpl::FplClient, http, metrics,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cfg = settings();
    let database_url = cfg
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    // Postgres pool, handed to every handler; closed on shutdown.
    let db_pool = PgPoolOptions::new()
        .max_connections(cfg.db_max_connections)
        .connect(&database_url)
        .await
        .context("failed to create Postgres pool")?;
    schema::ensure_schema(&db_pool)
        .await
        .context("failed to prepare database schema")?;

    let fpl = web::Data::new(FplClient::from_settings(cfg)?);
    let cache = web::Data::new(SnapshotCache::new(cfg.snapshot_ttl));
    let prometheus = metrics::build()?;

    log::info!("listening on {}", cfg.server_addr);
    let pool = db_pool.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .app_data(web::Data::new(pool.clone()))
            .app_data(fpl.clone())
            .app_data(cache.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&cfg.server_addr)?
    .run()
    .await?;

    db_pool.close().await;
    Ok(())
}
