//! Read-only HTTP client for the Fantasy Premier League API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::RetryIf;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::fpl::models::{Bootstrap, Fixture, StatsSnapshot};

const USER_AGENT: &str = "Fantasy EPL Tracker";

#[derive(Debug, Clone)]
pub struct FplClient {
    http: Client,
    base_url: String,
    retries: usize,
}

impl FplClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration, retries: usize) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(FplClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retries,
        })
    }

    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        Self::new(
            settings.fpl_base_url.clone(),
            settings.fpl_timeout,
            settings.fpl_retries,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/bootstrap-static/`: players and teams.
    pub async fn bootstrap(&self) -> AppResult<Bootstrap> {
        self.get_json("bootstrap-static/").await
    }

    /// GET `/fixtures/`: every fixture of the season, played or not.
    pub async fn fixtures(&self) -> AppResult<Vec<Fixture>> {
        self.get_json("fixtures/").await
    }

    /// Fetch bootstrap and fixtures concurrently.
    pub async fn snapshot(&self) -> AppResult<StatsSnapshot> {
        let (bootstrap, fixtures) = futures::try_join!(self.bootstrap(), self.fixtures())?;
        info!(
            players = bootstrap.elements.len(),
            teams = bootstrap.teams.len(),
            fixtures = fixtures.len(),
            "fetched FPL snapshot"
        );
        Ok(StatsSnapshot::new(bootstrap, fixtures))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(self.retries);

        RetryIf::start(strategy, || self.fetch_once::<T>(&url), FeedFailure::is_transient)
            .await
            .map_err(|f| f.error)
    }

    async fn fetch_once<T: DeserializeOwned>(&self, url: &str) -> Result<T, FeedFailure> {
        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(%url, error = %e, "FPL request failed");
            FeedFailure::transient(AppError::from(e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "FPL responded with an error status");
            let error = AppError::UpstreamUnavailable(format!("{url} responded with status {status}"));
            return Err(if is_transient_status(status) {
                FeedFailure::transient(error)
            } else {
                FeedFailure::permanent(error)
            });
        }

        response.json::<T>().await.map_err(|e| {
            FeedFailure::permanent(AppError::UpstreamUnavailable(format!(
                "could not decode {url}: {e}"
            )))
        })
    }
}

/// A failed feed attempt, tagged with whether trying again could help.
#[derive(Debug)]
struct FeedFailure {
    transient: bool,
    error: AppError,
}

impl FeedFailure {
    fn transient(error: AppError) -> Self {
        FeedFailure { transient: true, error }
    }

    fn permanent(error: AppError) -> Self {
        FeedFailure { transient: false, error }
    }

    fn is_transient(&self) -> bool {
        self.transient
    }
}

/// Server-side trouble and rate limiting are worth a retry; other 4xx are not.
fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::REQUEST_TIMEOUT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_server_errors_and_throttling_are_retried() {
        assert!(is_transient_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_transient_status(StatusCode::BAD_GATEWAY));
        assert!(is_transient_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_transient_status(StatusCode::NOT_FOUND));
        assert!(!is_transient_status(StatusCode::FORBIDDEN));
    }
}
