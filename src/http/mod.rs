pub mod feed;
pub mod health;
pub mod leaderboard;
pub mod routes;
pub mod setup;
pub mod squads;
pub mod transfers;
