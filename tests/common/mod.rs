#![allow(dead_code)]

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use vitalgrid::data_types::{
    Aggregation, ChartId, IndexWindow, MetricSeries, SamplePoint, SurfaceLayout,
};
use vitalgrid::registry::ChartRegistry;
use vitalgrid::render_gate::RenderGate;
use vitalgrid::{RenderBackend, SurfaceRef};

/// Everything a backend was asked to do, in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Create(SurfaceRef),
    Resize(SurfaceRef),
    Draw {
        surface: SurfaceRef,
        window: Option<IndexWindow>,
        points: usize,
    },
    Destroy(SurfaceRef),
}

#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn snapshot(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Drains recorded events, so follow-up assertions start clean.
    pub fn take(&self) -> Vec<Event> {
        self.0.borrow_mut().drain(..).collect()
    }

    pub fn draws(&self) -> usize {
        self.count(|e| matches!(e, Event::Draw { .. }))
    }

    pub fn creates(&self) -> usize {
        self.count(|e| matches!(e, Event::Create(_)))
    }

    pub fn destroys(&self) -> usize {
        self.count(|e| matches!(e, Event::Destroy(_)))
    }

    pub fn resizes(&self) -> usize {
        self.count(|e| matches!(e, Event::Resize(_)))
    }

    fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|e| pred(e)).count()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

/// Backend double that mints surface refs and records every call.
pub struct RecordingBackend {
    next: u64,
    log: EventLog,
}

impl RecordingBackend {
    pub fn new() -> (Self, EventLog) {
        let log = EventLog::default();
        (
            Self {
                next: 0,
                log: log.clone(),
            },
            log,
        )
    }
}

impl RenderBackend for RecordingBackend {
    fn create_surface(&mut self, _layout: &SurfaceLayout) -> SurfaceRef {
        self.next += 1;
        let surface = SurfaceRef(self.next);
        self.log.push(Event::Create(surface));
        surface
    }

    fn resize_surface(&mut self, surface: SurfaceRef, _layout: &SurfaceLayout) {
        self.log.push(Event::Resize(surface));
    }

    fn draw(
        &mut self,
        surface: SurfaceRef,
        labels: &[String],
        _values: &[Option<f64>],
        window: Option<IndexWindow>,
    ) {
        self.log.push(Event::Draw {
            surface,
            window,
            points: labels.len(),
        });
    }

    fn destroy(&mut self, surface: SurfaceRef) {
        self.log.push(Event::Destroy(surface));
    }
}

/// Lexically sortable synthetic timestamp for index `i`.
pub fn ts(i: usize) -> String {
    format!("t{i:04}")
}

/// Series whose points sit at `ts(i)` with value `i` for each `i` in
/// `range`.
pub fn series_over(metric: &str, range: Range<usize>) -> MetricSeries {
    MetricSeries::new(
        metric,
        range
            .map(|i| SamplePoint::new(ts(i), Some(i as f64)))
            .collect(),
    )
}

pub fn layout() -> SurfaceLayout {
    SurfaceLayout::new(600.0, 160.0, 2.0)
}

/// Builds a chart through the render gate and registers it.
pub fn build_chart(
    registry: &mut ChartRegistry,
    backend: &mut dyn RenderBackend,
    metric: &str,
    range: Range<usize>,
) -> ChartId {
    let series = series_over(metric, range);
    let id = registry.mint_id();
    let handle = RenderGate::rebuild(None, id, &series, Aggregation::Daily, &layout(), backend);
    registry.add(handle);
    id
}
