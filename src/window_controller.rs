use tracing::debug;

use crate::backend::RenderBackend;
use crate::data_types::{ChartId, ViewWindow};
use crate::gesture::{GestureTranslator, SurfaceBounds, WheelDirection};
use crate::registry::ChartRegistry;

/// Mouse button reported with a pointer-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Whether the view is unrestricted or narrowed to a shared window.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Full,
    Windowed(ViewWindow),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DragState {
    #[default]
    Idle,
    Active {
        chart: ChartId,
        start_x: f32,
        last_x: f32,
    },
}

/// Single source of truth for the visible time window shared by every
/// chart in a session. Gestures observed on any one chart's surface move
/// the window; the controller pushes the result to all registered charts.
///
/// Window state lives here, never in a chart: a page load (new controller)
/// always starts at Full, and nothing about gestures is persisted.
#[derive(Default)]
pub struct ViewWindowController {
    state: ViewState,
    drag: DragState,
}

impl ViewWindowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn active_window(&self) -> Option<&ViewWindow> {
        match &self.state {
            ViewState::Windowed(w) => Some(w),
            ViewState::Full => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.drag, DragState::Idle)
    }

    /// Chart the active drag started on, if any.
    pub fn drag_chart(&self) -> Option<ChartId> {
        match self.drag {
            DragState::Active { chart, .. } => Some(chart),
            DragState::Idle => None,
        }
    }

    /// Current drag extent as `(min_x, max_x)` in surface coordinates,
    /// for hosts drawing a selection overlay.
    pub fn drag_extent(&self) -> Option<(f32, f32)> {
        match self.drag {
            DragState::Active {
                start_x, last_x, ..
            } => Some((start_x.min(last_x), start_x.max(last_x))),
            DragState::Idle => None,
        }
    }

    /// Primary-button press starts a drag on `chart`; other buttons are
    /// ignored.
    pub fn pointer_down(&mut self, chart: ChartId, x: f32, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        self.drag = DragState::Active {
            chart,
            start_x: x,
            last_x: x,
        };
    }

    /// Extends the active drag. A move with no drag in progress is a
    /// no-op.
    pub fn pointer_move(&mut self, x: f32) {
        if let DragState::Active { last_x, .. } = &mut self.drag {
            *last_x = x;
        }
    }

    /// Abandons the drag without committing a window change.
    pub fn pointer_cancel(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Completes the drag and commits the selection to every chart.
    /// An up with no prior down, a drag whose chart vanished, and a
    /// degenerate (same-timestamp) selection all change nothing.
    /// Returns true when any chart's visible slice changed.
    pub fn pointer_up(
        &mut self,
        x: f32,
        bounds: &SurfaceBounds,
        registry: &mut ChartRegistry,
        backend: &mut dyn RenderBackend,
    ) -> bool {
        let DragState::Active { chart, start_x, .. } = self.drag else {
            return false;
        };
        self.drag = DragState::Idle;

        let Some(handle) = registry.get(chart) else {
            return false;
        };
        let Some(window) = GestureTranslator::window_from_drag(&handle.labels, start_x, x, bounds)
        else {
            // degenerate drag keeps whatever window was active before
            return false;
        };
        self.apply(window, registry, backend)
    }

    /// Steps the window one wheel notch, using the gesture chart's
    /// current pane (its full range when unwindowed) as the pane size.
    pub fn wheel_step(
        &mut self,
        chart: ChartId,
        direction: WheelDirection,
        registry: &mut ChartRegistry,
        backend: &mut dyn RenderBackend,
    ) -> bool {
        let Some(handle) = registry.get(chart) else {
            return false;
        };
        let Some(next) =
            GestureTranslator::window_from_wheel_step(handle.labels.len(), handle.window, direction)
        else {
            return false;
        };
        let window = ViewWindow::from_endpoints(
            handle.labels[next.start].clone(),
            handle.labels[next.end].clone(),
        );
        self.apply(window, registry, backend)
    }

    /// Replaces the active window outright (no merging with the previous
    /// one) and pushes it to every registered chart.
    pub fn apply(
        &mut self,
        window: ViewWindow,
        registry: &mut ChartRegistry,
        backend: &mut dyn RenderBackend,
    ) -> bool {
        debug!(start = %window.start, end = %window.end, "applying view window");
        self.state = ViewState::Windowed(window);
        self.push(registry, backend)
    }

    /// Double-click reset: every chart back to its full range.
    pub fn reset(
        &mut self,
        registry: &mut ChartRegistry,
        backend: &mut dyn RenderBackend,
    ) -> bool {
        debug!("resetting view to full range");
        self.state = ViewState::Full;
        self.push(registry, backend)
    }

    /// Re-pushes the active window to all registered charts; used after
    /// a render pass rebuilt some of them on the full range.
    pub fn reapply(
        &self,
        registry: &mut ChartRegistry,
        backend: &mut dyn RenderBackend,
    ) -> bool {
        self.push(registry, backend)
    }

    /// Applies the controller state to each chart independently: a chart
    /// whose axis does not overlap the window falls back to its full
    /// range without affecting its siblings. Charts whose visible slice
    /// is already correct are left untouched, so applying the same window
    /// twice draws nothing new.
    fn push(&self, registry: &mut ChartRegistry, backend: &mut dyn RenderBackend) -> bool {
        let window = self.active_window();
        let mut changed = false;
        for handle in registry.iter_mut() {
            let resolved = window.and_then(|w| w.resolve(&handle.labels));
            if handle.window == resolved {
                continue;
            }
            handle.window = resolved;
            backend.draw(handle.surface, &handle.labels, &handle.values, handle.window);
            changed = true;
        }
        changed
    }
}
