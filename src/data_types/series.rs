use serde::{Deserialize, Serialize};

/// One sample of a metric. Timestamps are opaque, sortable strings taken
/// straight from the wire (`t_utc`); the crate orders and looks them up
/// lexically and never parses them into dates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    #[serde(rename = "t_utc")]
    pub timestamp: String,
    #[serde(rename = "t_local", default, skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,
    #[serde(rename = "v")]
    pub value: Option<f64>,
}

impl SamplePoint {
    pub fn new(timestamp: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            timestamp: timestamp.into(),
            local_time: None,
            value,
        }
    }
}

/// A named, time-ordered list of samples for one metric.
/// Invariant: points are in non-decreasing timestamp order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric: String,
    #[serde(rename = "series")]
    pub points: Vec<SamplePoint>,
}

impl MetricSeries {
    pub fn new(metric: impl Into<String>, points: Vec<SamplePoint>) -> Self {
        Self {
            metric: metric.into(),
            points,
        }
    }

    /// The label axis: every timestamp, in series order.
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.timestamp.clone()).collect()
    }

    /// The value axis, index-aligned with [`labels`](Self::labels).
    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Aggregation granularity forwarded to the data source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Daily,
    Hourly,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "hourly" => Some(Self::Hourly),
            _ => None,
        }
    }
}

/// Canonical lookup key for a metric name: lowercased with everything but
/// ASCII alphanumerics stripped, so "SpO2", "spo2" and "sp-o2" all meet.
pub fn canonical_metric(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
