use chrono::{DateTime, Local};

use crate::data_types::{Aggregation, SamplePoint};
use crate::registry::ChartRegistry;
use crate::settings::{self, SettingsStore};

/// Largest number of samples written per hourly series.
pub const EXPORT_POINT_CAP: usize = 2000;

/// Caps a slice at `max_points` by keeping every n-th element.
pub fn downsample<T: Clone>(points: &[T], max_points: usize) -> Vec<T> {
    if max_points == 0 || points.len() <= max_points {
        return points.to_vec();
    }
    let step = points.len().div_ceil(max_points);
    points.iter().step_by(step).cloned().collect()
}

fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|c| csv_cell(c))
        .collect::<Vec<_>>()
        .join(",")
}

fn value_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// CSV for a single metric's samples: a `t_utc,t_local,value` header and
/// one quoted row per point.
pub fn series_csv(points: &[SamplePoint]) -> String {
    let mut rows = vec![csv_row(&["t_utc", "t_local", "value"])];
    for p in points {
        rows.push(csv_row(&[
            &p.timestamp,
            p.local_time.as_deref().unwrap_or(""),
            &value_cell(p.value),
        ]));
    }
    rows.join("\n")
}

/// File name for a single-series export: the metric with anything
/// non-alphanumeric flattened to `_`.
pub fn series_filename(metric: &str) -> String {
    let sanitized: String = metric
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{sanitized}_series.csv")
}

/// CSV for every visible chart in a registry: a `# timezone:` comment
/// line, a `metric,agg,t_utc,t_local,value` header, then the rows of each
/// series whose visibility preference is on. Hourly series are
/// downsampled to [`EXPORT_POINT_CAP`] samples.
pub fn visible_series_csv(
    registry: &ChartRegistry,
    store: &dyn SettingsStore,
    timezone: &str,
) -> String {
    let mut rows = vec![
        format!("# timezone: {timezone}"),
        csv_row(&["metric", "agg", "t_utc", "t_local", "value"]),
    ];
    for handle in registry.iter() {
        if !settings::series_visible(store, &handle.metric) {
            continue;
        }
        let points = match handle.aggregation {
            Aggregation::Hourly => downsample(&handle.points, EXPORT_POINT_CAP),
            Aggregation::Daily => handle.points.clone(),
        };
        for p in &points {
            rows.push(csv_row(&[
                &handle.metric,
                handle.aggregation.as_str(),
                &p.timestamp,
                p.local_time.as_deref().unwrap_or(""),
                &value_cell(p.value),
            ]));
        }
    }
    rows.join("\n")
}

/// `labs_{person}_{agg}_{yyyymmdd-hhmm}.csv`, with anything outside
/// alphanumerics, `_`, `-` and `.` flattened to `_`.
pub fn export_filename(person: &str, aggregation: Aggregation, at: DateTime<Local>) -> String {
    let person = if person.is_empty() { "current" } else { person };
    let raw = format!(
        "labs_{}_{}_{}.csv",
        person,
        aggregation.as_str(),
        at.format("%Y%m%d-%H%M")
    );
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
