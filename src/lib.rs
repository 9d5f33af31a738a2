//! Synchronized multi-chart time-window control for health metric series

pub mod backend;
pub mod bands;
pub mod cache;
pub mod data_types;
pub mod export;
pub mod fingerprint;
pub mod gesture;
pub mod loader;
pub mod registry;
pub mod render_gate;
pub mod session;
pub mod settings;
pub mod throttle;
pub mod window_controller;

pub use backend::{RenderBackend, SurfaceRef};
pub use data_types::{
    Aggregation, ChartHandle, ChartId, IndexWindow, MetricSeries, SamplePoint, SurfaceLayout,
    ViewWindow,
};
pub use gesture::{GestureTranslator, SurfaceBounds, WheelDirection};
pub use loader::{LoadOutcome, SeriesLoader, SeriesProvider};
pub use registry::ChartRegistry;
pub use render_gate::RenderGate;
pub use session::{RenderReport, ViewSession};
pub use window_controller::{PointerButton, ViewState, ViewWindowController};
