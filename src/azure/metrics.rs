//! 7-day CPU and memory averages from `Microsoft.Insights/metrics`.

use super::client::ArmClient;
use super::MetricFetcher;
use crate::config;
use crate::error::AppError;
use crate::models::{Metric, MetricSummary, MetricsResponse};
use chrono::{DateTime, Duration, SecondsFormat, Utc};

#[derive(Clone)]
pub struct MetricsClient {
    arm: ArmClient,
}

impl MetricsClient {
    pub fn new(arm: ArmClient) -> Self {
        Self { arm }
    }
}

impl MetricFetcher for MetricsClient {
    async fn get_metrics(&self, resource_uri: &str) -> Result<MetricSummary, AppError> {
        let url = format!(
            "{endpoint}/{resource_uri}/providers/Microsoft.Insights/metrics",
            endpoint = self.arm.endpoint()
        );
        let timespan = metric_timespan(Utc::now());
        let query = [
            ("api-version", config::METRICS_API_VERSION),
            ("timespan", timespan.as_str()),
            ("interval", config::METRIC_INTERVAL),
            ("metricnames", config::METRIC_NAMES),
            ("aggregation", config::METRIC_AGGREGATION),
            ("orderby", config::METRIC_ORDER_BY),
        ];

        let response: MetricsResponse = self
            .arm
            .get_json("finish the metrics request", &url, &query)
            .await?;
        let summary = summarize(&response, resource_uri);
        log::debug!(
            "metrics {resource_uri}: cpu={} mem={}",
            summary.cpu_average,
            summary.memory_average
        );
        Ok(summary)
    }
}

/// `start/end` covering the trailing window, RFC 3339 UTC to the second.
pub fn metric_timespan(now: DateTime<Utc>) -> String {
    let then = now - Duration::days(config::METRIC_WINDOW_DAYS);
    format!(
        "{}/{}",
        then.to_rfc3339_opts(SecondsFormat::Secs, true),
        now.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Reduce every known metric of the response to its average.
pub fn summarize(response: &MetricsResponse, resource_uri: &str) -> MetricSummary {
    let mut summary = MetricSummary::default();
    for metric in &response.value {
        let average = metric_average(metric, resource_uri);
        match metric.name.value.as_str() {
            config::METRIC_MEMORY => summary.memory_average = average,
            config::METRIC_CPU => summary.cpu_average = average,
            other => log::debug!("ignoring metric {other} for {resource_uri}"),
        }
    }
    summary
}

fn metric_average(metric: &Metric, resource_uri: &str) -> u8 {
    let samples: Vec<f64> = metric
        .timeseries
        .first()
        .map(|ts| ts.data.iter().filter_map(|d| d.average).collect())
        .unwrap_or_default();
    if samples.is_empty() {
        log::warn!(
            "no samples for {} on {resource_uri}, using 0",
            metric.name.value
        );
    }
    average_percentage(&samples)
}

/// Mean of `samples` truncated to a whole percent and held to 0..=100.
///
/// An empty slice gives 0.
pub fn average_percentage(samples: &[f64]) -> u8 {
    if samples.is_empty() {
        return 0;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    // NaN casts to 0
    mean.clamp(0.0, 100.0) as u8
}
