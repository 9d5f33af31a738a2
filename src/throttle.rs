use std::time::{Duration, Instant};

/// Shortest allowed gap between two render passes for one container.
pub const RENDER_MIN_INTERVAL: Duration = Duration::from_millis(300);

/// Quiet period before a resize is applied to the charts.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Drops re-render requests arriving too soon after the previous render
/// for the same container. A dropped request is not replayed; this is a
/// debounce, not a queue. Callers pass `now` explicitly so the behavior
/// tests without sleeping.
#[derive(Clone, Copy, Debug)]
pub struct RenderThrottle {
    min_interval: Duration,
    last_render: Option<Instant>,
}

impl RenderThrottle {
    pub fn new() -> Self {
        Self::with_interval(RENDER_MIN_INTERVAL)
    }

    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_render: None,
        }
    }

    /// True when a render may proceed now; records the admission.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.last_render {
            Some(prev) if now.duration_since(prev) < self.min_interval => false,
            _ => {
                self.last_render = Some(now);
                true
            }
        }
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new()
    }
}

/// Trailing-edge debouncer: every `request` re-arms the deadline and
/// `fire` reports readiness once the quiet period has elapsed, disarming
/// until the next request.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn request(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
