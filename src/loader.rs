use std::time::Duration;

use async_trait::async_trait;
use eyre::Result;
use tracing::{debug, warn};

use crate::cache::SeriesCache;
use crate::data_types::{Aggregation, MetricSeries};

/// External data source for metric series.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Live series for a person, aggregated as hinted. May fail.
    async fn fetch_series(
        &self,
        person: &str,
        aggregation: Aggregation,
    ) -> Result<Vec<MetricSeries>>;

    /// Cached sample dataset for when live data is unavailable.
    /// Never fails; `None` covers every failure mode.
    async fn fetch_preview(&self, person: &str) -> Option<Vec<MetricSeries>>;
}

/// What a load attempt produced.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Live data.
    Data {
        series: Vec<MetricSeries>,
        aggregation: Aggregation,
    },
    /// Fallback preview data.
    Preview(Vec<MetricSeries>),
    /// Neither live nor preview data could be obtained. The calling UI
    /// layer decides how to present this; nothing is thrown.
    Unavailable,
}

/// How long a fetched preview dataset is served without refetching.
pub const PREVIEW_TTL: Duration = Duration::from_millis(30_000);

/// Orchestrates live fetches with preview fallback. Preview responses are
/// cached per person for [`PREVIEW_TTL`]; concurrent requests for the same
/// person share one fetch.
pub struct SeriesLoader {
    preview_cache: SeriesCache<Vec<MetricSeries>>,
    preview_ttl: Duration,
}

impl SeriesLoader {
    pub fn new() -> Self {
        Self {
            preview_cache: SeriesCache::new(),
            preview_ttl: PREVIEW_TTL,
        }
    }

    pub fn with_preview_ttl(mut self, ttl: Duration) -> Self {
        self.preview_ttl = ttl;
        self
    }

    /// Loads series for one person: live data first, preview as fallback,
    /// [`LoadOutcome::Unavailable`] when both come up empty. A live fetch
    /// that succeeds with zero points falls back the same way a failed
    /// one does. `prefer_preview` tries the preview path first (the
    /// toolbar's preview mode) and still falls through to live data when
    /// no preview exists.
    pub async fn load(
        &self,
        provider: &dyn SeriesProvider,
        person: &str,
        aggregation: Aggregation,
        prefer_preview: bool,
    ) -> LoadOutcome {
        if prefer_preview {
            if let Some(preview) = self.preview(provider, person).await {
                return LoadOutcome::Preview(preview);
            }
        }

        match provider.fetch_series(person, aggregation).await {
            Ok(series) if series.iter().all(|s| s.points.is_empty()) => {
                debug!(person, "live fetch returned no data; trying preview");
                self.preview_or_unavailable(provider, person).await
            }
            Ok(series) => LoadOutcome::Data {
                series,
                aggregation,
            },
            Err(err) => {
                warn!(person, error = %err, "live series fetch failed; trying preview");
                self.preview_or_unavailable(provider, person).await
            }
        }
    }

    async fn preview_or_unavailable(
        &self,
        provider: &dyn SeriesProvider,
        person: &str,
    ) -> LoadOutcome {
        match self.preview(provider, person).await {
            Some(preview) => LoadOutcome::Preview(preview),
            None => LoadOutcome::Unavailable,
        }
    }

    /// Preview through the TTL cache. An empty preview dataset counts as
    /// unavailable, the same as a failed one.
    async fn preview(
        &self,
        provider: &dyn SeriesProvider,
        person: &str,
    ) -> Option<Vec<MetricSeries>> {
        let data = self
            .preview_cache
            .get(person, self.preview_ttl, move || async move {
                provider
                    .fetch_preview(person)
                    .await
                    .ok_or_else(|| eyre::eyre!("preview unavailable"))
            })
            .await?;
        if data.iter().all(|s| s.points.is_empty()) {
            return None;
        }
        Some(data)
    }
}

impl Default for SeriesLoader {
    fn default() -> Self {
        Self::new()
    }
}
