use std::collections::HashMap;

use crate::data_types::Aggregation;

/// Narrow persistence seam for user preferences (live/preview mode,
/// aggregation granularity, reference-band and per-series visibility).
/// Window and gesture state is deliberately NOT persisted; it resets
/// with each session.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for hosts without durable storage, and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Live vs preview data mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataMode {
    #[default]
    Live,
    Preview,
}

impl DataMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Preview => "preview",
        }
    }
}

/// Whether the mode preference applies to one person or to every view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeScope {
    #[default]
    Person,
    Global,
}

/// Preference key names, kept exactly as the storage contract the host
/// pages already rely on.
pub mod keys {
    use crate::data_types::canonical_metric;

    pub const MODE_SCOPE: &str = "labs_mode_scope";
    pub const MODE_GLOBAL: &str = "labs_mode_global";
    pub const BANDS_ENABLED: &str = "hp_bands_enabled";

    pub fn mode_for(person: &str) -> String {
        format!("labs_mode_{person}")
    }

    pub fn aggregation_for(person: &str) -> String {
        format!("hp:labs:agg:{person}")
    }

    pub fn series_visible(metric: &str) -> String {
        format!("hp_series_visible.{}", canonical_metric(metric))
    }
}

pub fn mode_scope(store: &dyn SettingsStore) -> ModeScope {
    match store.get(keys::MODE_SCOPE).as_deref() {
        Some("global") => ModeScope::Global,
        _ => ModeScope::Person,
    }
}

pub fn set_mode_scope(store: &mut dyn SettingsStore, scope: ModeScope) {
    let value = match scope {
        ModeScope::Global => "global",
        ModeScope::Person => "person",
    };
    store.set(keys::MODE_SCOPE, value);
}

fn active_mode_key(store: &dyn SettingsStore, person: &str) -> String {
    match mode_scope(store) {
        ModeScope::Global => keys::MODE_GLOBAL.to_string(),
        ModeScope::Person => keys::mode_for(person),
    }
}

/// Mode for the active scope; defaults to live.
pub fn data_mode(store: &dyn SettingsStore, person: &str) -> DataMode {
    match store.get(&active_mode_key(store, person)).as_deref() {
        Some("preview") => DataMode::Preview,
        _ => DataMode::Live,
    }
}

pub fn set_data_mode(store: &mut dyn SettingsStore, person: &str, mode: DataMode) {
    let key = active_mode_key(store, person);
    store.set(&key, mode.as_str());
}

/// Remembered aggregation for a person, or `default` when unset.
pub fn aggregation(
    store: &dyn SettingsStore,
    person: &str,
    default: Aggregation,
) -> Aggregation {
    store
        .get(&keys::aggregation_for(person))
        .and_then(|v| Aggregation::parse(&v))
        .unwrap_or(default)
}

pub fn set_aggregation(store: &mut dyn SettingsStore, person: &str, aggregation: Aggregation) {
    store.set(&keys::aggregation_for(person), aggregation.as_str());
}

/// Reference-band visibility; defaults to shown.
pub fn bands_enabled(store: &dyn SettingsStore) -> bool {
    store
        .get(keys::BANDS_ENABLED)
        .map(|v| v == "true")
        .unwrap_or(true)
}

pub fn set_bands_enabled(store: &mut dyn SettingsStore, enabled: bool) {
    store.set(keys::BANDS_ENABLED, if enabled { "true" } else { "false" });
}

/// Per-series visibility, keyed by canonical metric; defaults to shown.
pub fn series_visible(store: &dyn SettingsStore, metric: &str) -> bool {
    store
        .get(&keys::series_visible(metric))
        .map(|v| v == "true")
        .unwrap_or(true)
}

pub fn set_series_visible(store: &mut dyn SettingsStore, metric: &str, visible: bool) {
    store.set(
        &keys::series_visible(metric),
        if visible { "true" } else { "false" },
    );
}
