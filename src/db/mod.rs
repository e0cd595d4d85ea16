pub mod models;
pub mod schema;
pub mod squad_repo;
pub mod transfer_repo;
