//! Fixed settings for the ARM plan and metrics queries.

/// Azure Resource Manager endpoint (public cloud).
pub const ARM_ENDPOINT: &str = "https://management.azure.com";

/// Token scope for ARM requests.
pub const ARM_SCOPE: &str = "https://management.azure.com/.default";

/// API version of `Microsoft.Web/serverfarms`.
pub const PLANS_API_VERSION: &str = "2022-03-01";

/// API version of `Microsoft.Insights/metrics`.
pub const METRICS_API_VERSION: &str = "2018-01-01";

/// Plans of this kind host function apps and are skipped.
pub const EXCLUDED_PLAN_KIND: &str = "functionapp";

pub const METRIC_MEMORY: &str = "MemoryPercentage";
pub const METRIC_CPU: &str = "CpuPercentage";
/// Both metrics are fetched in one request.
pub const METRIC_NAMES: &str = "MemoryPercentage,CpuPercentage";

/// Trailing window the averages cover.
pub const METRIC_WINDOW_DAYS: i64 = 7;
/// One sample per day.
pub const METRIC_INTERVAL: &str = "P1D";
pub const METRIC_AGGREGATION: &str = "Average,count";
pub const METRIC_ORDER_BY: &str = "Average asc";

/// Log config read at startup, relative to the working directory.
pub const LOG4RS_FILE: &str = "log4rs.yml";
