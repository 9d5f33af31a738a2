use tracing::debug;

use crate::backend::RenderBackend;
use crate::data_types::{Aggregation, ChartHandle, ChartId, MetricSeries, SurfaceLayout};
use crate::fingerprint::fingerprint;

/// Decides whether an incoming dataset warrants tearing a chart down and
/// rebuilding it, and performs the teardown/create when it does.
/// Stateless; all inputs come in, the decision comes out.
pub struct RenderGate;

impl RenderGate {
    /// True when `existing` is absent or was built from different content.
    /// A handle whose fingerprint matches the incoming data is reused
    /// as-is, current window included.
    pub fn should_rebuild(
        existing: Option<&ChartHandle>,
        labels: &[String],
        values: &[Option<f64>],
    ) -> bool {
        match existing {
            Some(handle) => handle.fingerprint != fingerprint(labels, values),
            None => true,
        }
    }

    /// Tears down `existing` (if any) and builds a fresh chart sized to
    /// the container's current layout box. The new handle starts on the
    /// full range; any active drag selection on the replaced chart is the
    /// caller's to clear.
    pub fn rebuild(
        existing: Option<ChartHandle>,
        id: ChartId,
        series: &MetricSeries,
        aggregation: Aggregation,
        layout: &SurfaceLayout,
        backend: &mut dyn RenderBackend,
    ) -> ChartHandle {
        if let Some(old) = existing {
            debug!(metric = %old.metric, "tearing down replaced chart");
            backend.destroy(old.surface);
        }

        let labels = series.labels();
        let values = series.values();
        let fingerprint = fingerprint(&labels, &values);
        let surface = backend.create_surface(layout);
        debug!(metric = %series.metric, points = series.points.len(), "created chart");

        ChartHandle {
            id,
            metric: series.metric.clone(),
            labels,
            values,
            points: series.points.clone(),
            aggregation,
            window: None,
            fingerprint,
            surface,
        }
    }
}
