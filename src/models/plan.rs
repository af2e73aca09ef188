//! App Service plan record and its ARM wire shape.

use super::MetricSummary;
use serde::Deserialize;

/// One App Service plan as listed for the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanRecord {
    /// Plan name.
    pub name: String,
    /// SKU name, e.g. `P1v2`.
    pub sku_name: String,
    /// Number of worker instances.
    pub instance_count: i32,
    /// Plan kind, e.g. `app`, `linux`.
    pub kind: String,
    /// ARM id without the leading slash, ready for the metrics endpoint.
    pub resource_uri: String,
    /// Filled in once the metrics fan-out has finished.
    pub metrics: MetricSummary,
}

/// One page of `Microsoft.Web/serverfarms`.
#[derive(Deserialize, Debug, Default)]
pub struct PlanPage {
    #[serde(default)]
    pub value: Vec<AppServicePlan>,
    /// Absent on the last page.
    #[serde(rename = "nextLink")]
    pub next_link: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppServicePlan {
    pub id: String,
    pub name: String,
    pub kind: Option<String>,
    pub sku: Option<SkuDescription>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SkuDescription {
    pub name: Option<String>,
    pub tier: Option<String>,
    pub capacity: Option<i32>,
}
