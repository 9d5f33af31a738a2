use crate::data_types::{IndexWindow, ViewWindow};

/// Bounding box of a chart's drawing surface, in the same coordinate
/// space as incoming pointer events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Scroll direction of a wheel step as observed on a chart surface.
/// Positive wheel deltas page forward (later timestamps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Forward,
    Backward,
}

impl WheelDirection {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Fraction of the pane stepped per wheel notch.
const WHEEL_STEP_RATIO: f64 = 0.15;

/// Stateless mapping from pointer/wheel signals on a 2D surface to
/// timestamps and index windows. Pure functions over primitive inputs so
/// the logic tests without any UI framework present.
pub struct GestureTranslator;

impl GestureTranslator {
    /// Timestamp label under a pixel X position. The relative position is
    /// clamped to [0, 1] across the surface width and mapped linearly to
    /// an index; exact bucket boundaries land on the earlier index.
    pub fn time_at_x<'a>(
        labels: &'a [String],
        pixel_x: f32,
        bounds: &SurfaceBounds,
    ) -> Option<&'a str> {
        if labels.is_empty() || bounds.width <= 0.0 {
            return None;
        }
        let rel = ((pixel_x - bounds.left) / bounds.width).clamp(0.0, 1.0);
        let idx = (rel as f64 * (labels.len() - 1) as f64).floor() as usize;
        Some(labels[idx.min(labels.len() - 1)].as_str())
    }

    /// Window spanned by a completed drag. A drag whose ends resolve to
    /// the same timestamp is degenerate and selects nothing.
    pub fn window_from_drag(
        labels: &[String],
        start_x: f32,
        end_x: f32,
        bounds: &SurfaceBounds,
    ) -> Option<ViewWindow> {
        let t1 = Self::time_at_x(labels, start_x, bounds)?;
        let t2 = Self::time_at_x(labels, end_x, bounds)?;
        if t1 == t2 {
            return None;
        }
        Some(ViewWindow::from_endpoints(t1, t2))
    }

    /// Steps the current pane one notch in the scroll direction. The pane
    /// size stays fixed; at either end of the axis the shift shrinks so
    /// the window never leaves `[0, len - 1]`. `current = None` treats the
    /// full axis as the pane.
    pub fn window_from_wheel_step(
        len: usize,
        current: Option<IndexWindow>,
        direction: WheelDirection,
    ) -> Option<IndexWindow> {
        if len <= 1 {
            return None;
        }
        let pane = current.or_else(|| IndexWindow::full(len))?;
        let size = pane.size() as i64;
        let step = ((size as f64 * WHEEL_STEP_RATIO).floor() as i64).max(1);
        let delta = match direction {
            WheelDirection::Forward => step,
            WheelDirection::Backward => -step,
        };

        let last = (len - 1) as i64;
        let mut start = pane.start as i64 + delta;
        let mut end = pane.end as i64 + delta;
        if start < 0 {
            start = 0;
            end = (start + size - 1).min(last);
        }
        if end > last {
            end = last;
            start = (end - size + 1).max(0);
        }

        Some(IndexWindow {
            start: start as usize,
            end: end as usize,
        })
    }
}
