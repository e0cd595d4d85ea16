//! FPL fantasy squads: roster persistence with a transfer ledger, and a
//! custom points formula scored against the live FPL feed.

pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod fpl;
pub mod http;
pub mod metrics;
pub mod scoring;
pub mod squad;
