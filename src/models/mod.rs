//! Domain models for the App Service plan report.
//!
//! - [`PlanRecord`] and the `serverfarms` wire types
//! - [`MetricSummary`] - per plan utilization averages
//! - [`MetricsResponse`] - `Microsoft.Insights/metrics` wire types

mod metric;
mod plan;

// Re-export public types
pub use metric::{LocalizableString, Metric, MetricSummary, MetricValue, MetricsResponse, TimeSeries};
pub use plan::{AppServicePlan, PlanPage, PlanRecord, SkuDescription};
