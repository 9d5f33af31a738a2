pub mod chart;
pub mod series;
pub mod window;

pub use chart::{ChartHandle, ChartId, SurfaceLayout};
pub use series::{canonical_metric, Aggregation, MetricSeries, SamplePoint};
pub use window::{IndexWindow, ViewWindow};
