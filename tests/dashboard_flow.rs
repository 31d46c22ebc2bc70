//! End-to-end flow over the non-GUI seam: surfaces -> adapters -> counts
//! document -> chart state.

use indexmap::IndexMap;
use newspulse::charts::{ChartAdapter, ChartKind, SurfaceRegistry};
use newspulse::data::{
    distribute, parse_metrics, series_feed, AggregateCounts, INDIVIDUALS_CATEGORY, REQUESTS_TOTAL,
    TOPICS_CATEGORY,
};
use newspulse::gui::{person_path, submit_query, SearchAction};

fn mount(registry: &SurfaceRegistry, id: &str, kind: ChartKind) -> ChartAdapter {
    match registry.resolve(id) {
        Ok(surface) => ChartAdapter::new(surface, kind),
        Err(_) => ChartAdapter::inert(kind),
    }
}

#[test]
fn counts_document_drives_the_bound_charts() {
    let mut registry = SurfaceRegistry::new();
    registry.register("individuals", "Individuals");
    registry.register("topics", "Topics");

    let mut charts = IndexMap::new();
    charts.insert(
        INDIVIDUALS_CATEGORY.to_string(),
        mount(&registry, "individuals", ChartKind::Pie),
    );
    charts.insert(
        TOPICS_CATEGORY.to_string(),
        mount(&registry, "topics", ChartKind::Pie),
    );

    // Before any data arrives, slots show the pie placeholder dataset.
    for adapter in charts.values() {
        assert_eq!(adapter.labels().len(), 3);
        assert_eq!(adapter.values(), &[1.0, 1.0, 1.0]);
    }

    let counts: AggregateCounts =
        serde_json::from_str(r#"{"Individuals": {"a": 3, "b": 5}, "Topics": {"x": 1}}"#).unwrap();
    distribute(&counts, &mut charts);

    let individuals = &charts[INDIVIDUALS_CATEGORY];
    assert_eq!(individuals.labels(), &["a".to_string(), "b".to_string()]);
    assert_eq!(individuals.values(), &[3.0, 5.0]);
    assert_eq!(individuals.redraws_requested(), 1);

    let topics = &charts[TOPICS_CATEGORY];
    assert_eq!(topics.labels(), &["x".to_string()]);
    assert_eq!(topics.values(), &[1.0]);
}

#[test]
fn missing_surface_degrades_to_an_inert_slot() {
    let registry = SurfaceRegistry::new(); // nothing registered

    let mut charts = IndexMap::new();
    charts.insert(
        INDIVIDUALS_CATEGORY.to_string(),
        mount(&registry, "individuals", ChartKind::Pie),
    );

    let counts: AggregateCounts =
        serde_json::from_str(r#"{"Individuals": {"a": 3}}"#).unwrap();
    distribute(&counts, &mut charts);

    let slot = &charts[INDIVIDUALS_CATEGORY];
    assert!(slot.is_inert());
    assert!(slot.labels().is_empty());
    assert_eq!(slot.redraws_requested(), 0);
}

#[test]
fn metrics_document_drives_the_requests_chart() {
    let mut registry = SurfaceRegistry::new();
    registry.register("requests", "HTTP Requests Total");
    let mut chart = mount(&registry, "requests", ChartKind::Line);

    let metrics = parse_metrics("# counter\nrequests_total 4\nrequests_total 7\n");
    let (labels, values) = series_feed(&metrics, REQUESTS_TOTAL).unwrap();
    chart.update(values, Some(labels));

    assert_eq!(chart.values(), &[4.0, 7.0]);
    assert_eq!(chart.labels(), &["0".to_string(), "1".to_string()]);
}

#[test]
fn search_submission_routes_or_alerts() {
    match submit_query("john smith") {
        SearchAction::Navigate { query, path } => {
            assert_eq!(query, "john smith");
            assert_eq!(path, "/person/john%20smith");
        }
        other => panic!("expected navigation, got {other:?}"),
    }

    assert_eq!(submit_query(""), SearchAction::EmptyQuery);
    assert_eq!(person_path("émile"), "/person/%C3%A9mile");
}
