//! Azure Resource Manager access.
//!
//! - [`client`] - Authenticated HTTP client shared by the others
//! - [`plans`] - App Service plan listing
//! - [`metrics`] - Plan utilization metrics
//!
//! The orchestration in the crate root only sees the [`PlanLister`] and
//! [`MetricFetcher`] traits, so tests can swap in stubs.

mod client;
mod metrics;
mod plans;

use crate::error::AppError;
use crate::models::{MetricSummary, PlanRecord};
use std::future::Future;

// Re-export public types and functions
pub use client::{decode_json, default_credential, ArmClient};
pub use metrics::{average_percentage, metric_timespan, summarize, MetricsClient};
pub use plans::{normalize_resource_uri, plans_from_page, PlansClient};

/// Source of the plans of a subscription.
pub trait PlanLister {
    fn list_plans(
        &self,
        subscription_id: &str,
    ) -> impl Future<Output = Result<Vec<PlanRecord>, AppError>> + Send;
}

/// Source of per plan utilization. Called concurrently from spawned tasks.
pub trait MetricFetcher: Send + Sync + 'static {
    fn get_metrics(
        &self,
        resource_uri: &str,
    ) -> impl Future<Output = Result<MetricSummary, AppError>> + Send;
}
