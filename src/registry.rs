use crate::backend::RenderBackend;
use crate::data_types::{ChartHandle, ChartId};

/// Ordered collection of the charts currently displayed in one session.
/// Mutated only during a render pass (clear-then-repopulate) or read
/// while a window update walks it.
#[derive(Default)]
pub struct ChartRegistry {
    charts: Vec<ChartHandle>,
    next_id: u64,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh chart id. Ids stay unique across render passes.
    pub fn mint_id(&mut self) -> ChartId {
        self.next_id += 1;
        ChartId(self.next_id)
    }

    pub fn add(&mut self, handle: ChartHandle) {
        self.charts.push(handle);
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartHandle> {
        self.charts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ChartHandle> {
        self.charts.iter_mut()
    }

    pub fn get(&self, id: ChartId) -> Option<&ChartHandle> {
        self.charts.iter().find(|h| h.id == id)
    }

    pub fn by_metric(&self, metric: &str) -> Option<&ChartHandle> {
        self.charts.iter().find(|h| h.metric == metric)
    }

    /// Removes every chart and tears its surface down.
    pub fn clear(&mut self, backend: &mut dyn RenderBackend) {
        for handle in self.charts.drain(..) {
            backend.destroy(handle.surface);
        }
    }

    /// Takes every handle out without destroying surfaces: the start of
    /// a render pass, which reuses or tears down each one individually.
    pub fn take_all(&mut self) -> Vec<ChartHandle> {
        std::mem::take(&mut self.charts)
    }
}
