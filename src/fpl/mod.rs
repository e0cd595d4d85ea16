pub mod client;
pub mod models;

pub use client::FplClient;
pub use models::{Bootstrap, Fixture, FplPlayer, FplTeam, StatsSnapshot};
