use crate::data_types::canonical_metric;

/// A labeled value band drawn behind a metric's plot (by the host's
/// painter; this crate only owns the lookup).
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceBand {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl ReferenceBand {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
        }
    }
}

/// Built-in bands for the critical vitals, keyed by canonical metric.
pub fn reference_bands(metric: &str) -> Vec<ReferenceBand> {
    match canonical_metric(metric).as_str() {
        "hr" => vec![ReferenceBand::new("Normal", 60.0, 100.0)],
        "spo2" => vec![ReferenceBand::new("Healthy", 94.0, 100.0)],
        _ => Vec::new(),
    }
}
