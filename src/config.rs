//! Runtime configuration for the squad scoring service.

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

use crate::squad::roster::RosterLimits;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Postgres connection string; the binary refuses to start without it.
    pub database_url: Option<String>,
    pub server_addr: String,
    pub db_max_connections: u32,
    /// Root of the FPL API, without a trailing slash.
    pub fpl_base_url: String,
    pub fpl_timeout: Duration,
    /// Extra attempts after the first failed feed request.
    pub fpl_retries: usize,
    /// How long a fetched stats snapshot is served from memory.
    pub snapshot_ttl: Duration,
    pub max_teams: usize,
    pub max_players: usize,
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl Settings {
    pub fn from_env() -> Self {
        let fpl_base_url = env::var("FPL_BASE_URL")
            .unwrap_or_else(|_| "https://fantasy.premierleague.com/api".into())
            .trim_end_matches('/')
            .to_string();

        Settings {
            database_url: env::var("DATABASE_URL").ok(),
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into()),
            db_max_connections: parsed("DB_MAX_CONNECTIONS", 5),
            fpl_base_url,
            fpl_timeout: Duration::from_secs(parsed("FPL_TIMEOUT_SECS", 10)),
            fpl_retries: parsed("FPL_RETRIES", 3),
            snapshot_ttl: Duration::from_secs(parsed("SNAPSHOT_TTL_SECS", 300)),
            max_teams: parsed("MAX_TEAMS", 2),
            max_players: parsed("MAX_PLAYERS", 3),
        }
    }

    pub fn limits(&self) -> RosterLimits {
        RosterLimits {
            max_teams: self.max_teams,
            max_players: self.max_players,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
