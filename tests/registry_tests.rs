mod common;

use common::{build_chart, RecordingBackend};
use vitalgrid::ChartRegistry;

#[test]
fn minted_ids_are_unique() {
    let mut registry = ChartRegistry::new();
    let a = registry.mint_id();
    let b = registry.mint_id();
    assert_ne!(a, b);
}

#[test]
fn iteration_preserves_insertion_order() {
    let mut registry = ChartRegistry::new();
    let (mut backend, _log) = RecordingBackend::new();
    build_chart(&mut registry, &mut backend, "hr", 0..10);
    build_chart(&mut registry, &mut backend, "spo2", 0..10);
    build_chart(&mut registry, &mut backend, "weight", 0..10);

    let metrics: Vec<&str> = registry.iter().map(|h| h.metric.as_str()).collect();
    assert_eq!(metrics, ["hr", "spo2", "weight"]);
}

#[test]
fn lookup_by_id_and_metric() {
    let mut registry = ChartRegistry::new();
    let (mut backend, _log) = RecordingBackend::new();
    let id = build_chart(&mut registry, &mut backend, "hr", 0..10);

    assert_eq!(registry.get(id).unwrap().metric, "hr");
    assert_eq!(registry.by_metric("hr").unwrap().id, id);
    assert!(registry.by_metric("spo2").is_none());
}

#[test]
fn clear_destroys_every_surface() {
    let mut registry = ChartRegistry::new();
    let (mut backend, log) = RecordingBackend::new();
    build_chart(&mut registry, &mut backend, "hr", 0..10);
    build_chart(&mut registry, &mut backend, "spo2", 0..10);
    log.take();

    registry.clear(&mut backend);
    assert!(registry.is_empty());
    assert_eq!(log.destroys(), 2);
}

#[test]
fn take_all_empties_without_destroying() {
    let mut registry = ChartRegistry::new();
    let (mut backend, log) = RecordingBackend::new();
    build_chart(&mut registry, &mut backend, "hr", 0..10);
    log.take();

    let taken = registry.take_all();
    assert_eq!(taken.len(), 1);
    assert!(registry.is_empty());
    assert_eq!(log.destroys(), 0);
}
