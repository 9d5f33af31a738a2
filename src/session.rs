use std::time::Instant;

use tracing::debug;

use crate::backend::RenderBackend;
use crate::data_types::{Aggregation, ChartHandle, ChartId, MetricSeries, SurfaceLayout};
use crate::gesture::{SurfaceBounds, WheelDirection};
use crate::registry::ChartRegistry;
use crate::render_gate::RenderGate;
use crate::throttle::{Debouncer, RenderThrottle, RESIZE_DEBOUNCE};
use crate::window_controller::{PointerButton, ViewWindowController};

/// What a render pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub built: usize,
    pub reused: usize,
    pub removed: usize,
    /// The request arrived inside the throttle interval and was dropped
    /// whole (not queued, not replayed).
    pub dropped: bool,
}

/// One widget instance: its charts, its window controller, its render
/// throttle. Every independent widget gets its own session; nothing here
/// is process-wide.
pub struct ViewSession {
    backend: Box<dyn RenderBackend>,
    registry: ChartRegistry,
    controller: ViewWindowController,
    throttle: RenderThrottle,
    resize_debounce: Debouncer,
    pending_layout: Option<SurfaceLayout>,
}

impl ViewSession {
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self {
            backend,
            registry: ChartRegistry::new(),
            controller: ViewWindowController::new(),
            throttle: RenderThrottle::new(),
            resize_debounce: Debouncer::new(RESIZE_DEBOUNCE),
            pending_layout: None,
        }
    }

    pub fn charts(&self) -> &ChartRegistry {
        &self.registry
    }

    pub fn controller(&self) -> &ViewWindowController {
        &self.controller
    }

    /// Renders one dataset batch. For each incoming series the existing
    /// chart is reused when its content fingerprint matches, rebuilt when
    /// it differs; charts whose metric disappeared are destroyed. The
    /// active view window survives the pass and is reapplied to every
    /// chart, newly built ones included.
    pub fn render(
        &mut self,
        datasets: &[MetricSeries],
        aggregation: Aggregation,
        layout: &SurfaceLayout,
        now: Instant,
    ) -> RenderReport {
        let mut report = RenderReport::default();
        if !self.throttle.admit(now) {
            debug!("render request dropped by throttle");
            report.dropped = true;
            return report;
        }

        let mut previous = self.registry.take_all();
        for series in datasets {
            let existing = match previous.iter().position(|h| h.metric == series.metric) {
                Some(i) => Some(previous.remove(i)),
                None => None,
            };

            let labels = series.labels();
            let values = series.values();
            if let Some(handle) = &existing {
                if !RenderGate::should_rebuild(Some(handle), &labels, &values) {
                    // same content: keep surface, window, everything
                    report.reused += 1;
                    self.registry.add(existing.unwrap());
                    continue;
                }
            }

            self.drop_drag_on(existing.as_ref());
            let id = self.registry.mint_id();
            let built = RenderGate::rebuild(
                existing,
                id,
                series,
                aggregation,
                layout,
                self.backend.as_mut(),
            );
            self.backend
                .draw(built.surface, &built.labels, &built.values, None);
            report.built += 1;
            self.registry.add(built);
        }

        for stale in previous {
            self.drop_drag_on(Some(&stale));
            self.backend.destroy(stale.surface);
            report.removed += 1;
        }

        // the controller owns the window; rebuilt charts pick it back up
        self.controller
            .reapply(&mut self.registry, self.backend.as_mut());

        debug!(
            built = report.built,
            reused = report.reused,
            removed = report.removed,
            "render pass complete"
        );
        report
    }

    /// Destroys every chart and forgets the active window.
    pub fn clear(&mut self) {
        self.controller.pointer_cancel();
        self.registry.clear(self.backend.as_mut());
        self.controller
            .reset(&mut self.registry, self.backend.as_mut());
    }

    pub fn pointer_down(&mut self, chart: ChartId, x: f32, button: PointerButton) {
        self.controller.pointer_down(chart, x, button);
    }

    pub fn pointer_move(&mut self, x: f32) {
        self.controller.pointer_move(x);
    }

    /// `bounds` is the bounding box of the surface the drag happened on.
    pub fn pointer_up(&mut self, x: f32, bounds: &SurfaceBounds) -> bool {
        self.controller
            .pointer_up(x, bounds, &mut self.registry, self.backend.as_mut())
    }

    pub fn pointer_cancel(&mut self) {
        self.controller.pointer_cancel();
    }

    /// Double-click: every chart back to its full range.
    pub fn double_click(&mut self) -> bool {
        self.controller
            .reset(&mut self.registry, self.backend.as_mut())
    }

    pub fn wheel(&mut self, chart: ChartId, direction: WheelDirection) -> bool {
        self.controller
            .wheel_step(chart, direction, &mut self.registry, self.backend.as_mut())
    }

    /// Drag extent for hosts drawing a selection overlay.
    pub fn drag_extent(&self) -> Option<(f32, f32)> {
        self.controller.drag_extent()
    }

    /// Notes a container resize. The new layout is applied on the next
    /// [`tick`](Self::tick) after the debounce quiet period.
    pub fn resize(&mut self, layout: SurfaceLayout, now: Instant) {
        self.pending_layout = Some(layout);
        self.resize_debounce.request(now);
    }

    /// Lets the resize debouncer fire: resizes every chart's surface to
    /// the pending layout and redraws with existing data and window
    /// unchanged. Returns true when a resize was applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.resize_debounce.fire(now) {
            return false;
        }
        let Some(layout) = self.pending_layout.take() else {
            return false;
        };
        for handle in self.registry.iter() {
            self.backend.resize_surface(handle.surface, &layout);
            self.backend
                .draw(handle.surface, &handle.labels, &handle.values, handle.window);
        }
        true
    }

    /// A rebuild resets any drag selection riding on the replaced chart.
    fn drop_drag_on(&mut self, handle: Option<&ChartHandle>) {
        if let Some(handle) = handle {
            if self.controller.drag_chart() == Some(handle.id) {
                self.controller.pointer_cancel();
            }
        }
    }
}
