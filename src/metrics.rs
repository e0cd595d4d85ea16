//! Prometheus request metrics, exposed at `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Build the request-metrics middleware. Health probes are not counted.
pub fn build() -> anyhow::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("squads")
        .endpoint("/metrics")
        .exclude("/api/healthz")
        .build()
        .map_err(|e| anyhow::anyhow!("metrics builder: {e}"))
}
