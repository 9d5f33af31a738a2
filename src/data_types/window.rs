/// The visible timestamp sub-range shared by every chart in a view.
/// A value type, not tied to any one chart: each chart locates the
/// matching label range in its own axis via [`resolve`](Self::resolve).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewWindow {
    pub start: String,
    pub end: String,
}

impl ViewWindow {
    /// Builds a window from two timestamps given in either order.
    pub fn from_endpoints(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Locates this window inside one chart's label axis: the first label
    /// >= start through the last label <= end. `None` when no label meets
    /// the start bound or the bounds cross; that chart then falls back to
    /// its full range, independently of its siblings.
    pub fn resolve(&self, labels: &[String]) -> Option<IndexWindow> {
        let start = labels.iter().position(|l| l.as_str() >= self.start.as_str())?;
        let end = labels.iter().rposition(|l| l.as_str() <= self.end.as_str())?;
        if end < start {
            return None;
        }
        Some(IndexWindow { start, end })
    }
}

/// Inclusive index range into one chart's label axis.
/// Invariant: `start <= end < len(labels)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexWindow {
    pub start: usize,
    pub end: usize,
}

impl IndexWindow {
    /// The whole axis, or `None` for an empty one.
    pub fn full(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            start: 0,
            end: len - 1,
        })
    }

    /// Number of indices spanned: the pane size, which panning keeps
    /// fixed.
    pub fn size(&self) -> usize {
        self.end - self.start + 1
    }
}
