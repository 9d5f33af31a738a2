use crate::backend::SurfaceRef;

use super::series::{Aggregation, SamplePoint};
use super::window::IndexWindow;

/// Identifier for a chart within one session. Opaque and monotonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChartId(pub u64);

/// Layout box of a chart container in CSS pixels, plus the display pixel
/// density used to size the backing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLayout {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl SurfaceLayout {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Backing-store width in device pixels, never below 1.
    pub fn device_width(&self) -> u32 {
        (self.width * self.pixel_ratio).round().max(1.0) as u32
    }

    /// Backing-store height in device pixels, never below 1.
    pub fn device_height(&self) -> u32 {
        (self.height * self.pixel_ratio).round().max(1.0) as u32
    }
}

/// A chart built for one metric: the full series it was built from, the
/// window currently applied to it, and the fingerprint the render gate
/// compares on the next pass.
#[derive(Clone, Debug)]
pub struct ChartHandle {
    pub id: ChartId,
    pub metric: String,
    /// Full label axis, index-aligned with `values`.
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    /// Source samples, kept for export.
    pub points: Vec<SamplePoint>,
    pub aggregation: Aggregation,
    /// `None` = full range shown.
    pub window: Option<IndexWindow>,
    pub fingerprint: String,
    pub surface: SurfaceRef,
}

impl ChartHandle {
    /// Labels inside the applied window (all of them when unwindowed).
    pub fn visible_labels(&self) -> &[String] {
        match self.window {
            Some(w) => &self.labels[w.start..=w.end],
            None => &self.labels,
        }
    }

    /// Values inside the applied window.
    pub fn visible_values(&self) -> &[Option<f64>] {
        match self.window {
            Some(w) => &self.values[w.start..=w.end],
            None => &self.values,
        }
    }
}
