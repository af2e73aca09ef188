//! Utilization summary attached to each plan.

use serde::Deserialize;
use std::fmt;

/// 7-day CPU and memory averages of a plan, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricSummary {
    pub cpu_average: u8,
    pub memory_average: u8,
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU Average (%): \t{}\nMemory Average (%): \t{}",
            self.cpu_average, self.memory_average
        )
    }
}

/// Body of `Microsoft.Insights/metrics`.
#[derive(Deserialize, Debug, Default)]
pub struct MetricsResponse {
    #[serde(default)]
    pub value: Vec<Metric>,
}

#[derive(Deserialize, Debug)]
pub struct Metric {
    pub name: LocalizableString,
    #[serde(default)]
    pub timeseries: Vec<TimeSeries>,
}

#[derive(Deserialize, Debug)]
pub struct LocalizableString {
    pub value: String,
    #[serde(rename = "localizedValue")]
    pub localized_value: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TimeSeries {
    #[serde(default)]
    pub data: Vec<MetricValue>,
}

/// One daily sample. Azure leaves `average` out for days without data.
#[derive(Deserialize, Debug)]
pub struct MetricValue {
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,
    pub average: Option<f64>,
    pub count: Option<f64>,
}
