use boardmap_core::config::ViewConfig;
use boardmap_core::identity::{slugify, IdentityPolicy};
use boardmap_core::model::{BoardRow, NodeKind, ViewMode};
use view::{Action, FilterPatch, Freshness, Recompute, ViewStore};

fn sample_rows() -> Vec<BoardRow> {
    vec![
        BoardRow::new("Alice Smith", "Hope Foundation")
            .with_email("alice@example.org")
            .with_role("Director")
            .with_years(Some(2021), None),
        BoardRow::new("Bob Lee", "Hope Foundation")
            .with_role("Treasurer")
            .with_years(Some(2020), None),
        BoardRow::new("Alice Smith", "Water Now")
            .with_email("alice@example.org")
            .with_role("Director")
            .with_years(Some(2022), None),
        BoardRow::new("Chris Young", "Water Now")
            .with_role("Director")
            .with_years(Some(2022), None),
    ]
}

#[test]
fn test_import_does_not_recompute() {
    let mut store = ViewStore::default();
    store.import_rows(sample_rows());

    assert_eq!(store.freshness(), Freshness::Dirty);
    assert_eq!(store.row_count(), 4);
    assert!(store.bi().is_empty());
    assert!(store.graph().is_empty());

    store.compute();
    assert_eq!(store.freshness(), Freshness::Clean);
    assert_eq!(store.bi().people.len(), 3);
    assert_eq!(store.graph().links.len(), 2);
}

#[test]
fn test_set_view_recomputes_immediately() {
    let mut store = ViewStore::default();
    store.import_rows(sample_rows());
    store.set_view(ViewMode::Orgs);

    assert_eq!(store.freshness(), Freshness::Clean);
    assert_eq!(store.view(), ViewMode::Orgs);
    assert_eq!(store.graph().nodes.len(), 2);
    assert!(store.graph().nodes.iter().all(|n| n.kind == NodeKind::Org));
    assert_eq!(store.graph().links.len(), 1);
}

#[test]
fn test_set_filters_waits_for_compute() {
    let mut store = ViewStore::default();
    store.import_rows(sample_rows());
    store.compute();
    let before = store.graph().clone();

    store.set_filters(FilterPatch::default().role("Director"));
    assert_eq!(store.freshness(), Freshness::Dirty);
    assert_eq!(store.graph(), &before);

    store.compute();
    // Bob is a Treasurer; only Alice and Chris remain.
    assert_eq!(store.bi().people.len(), 2);
    assert_eq!(store.graph().links.len(), 1);
    assert!(store
        .graph()
        .link("person:alice@example.org", "person:chris young")
        .is_some());
}

#[test]
fn test_year_min_keeps_rows_without_start_year() {
    let mut rows = sample_rows();
    rows.push(BoardRow::new("Dana Cruz", "Hope Foundation"));

    let mut store = ViewStore::default();
    store.import_rows(rows);
    store.set_filters(FilterPatch::default().year_min(Some(2021)));
    store.compute();

    let names: Vec<&str> = store.bi().people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice Smith", "Chris Young", "Dana Cruz"]);
}

#[test]
fn test_year_max_excludes_later_end_years() {
    let rows = vec![
        BoardRow::new("A", "Hope").with_years(Some(2010), Some(2015)),
        BoardRow::new("B", "Hope").with_years(Some(2010), Some(2024)),
        BoardRow::new("C", "Hope").with_years(Some(2010), None),
    ];
    let mut store = ViewStore::default();
    store.import_rows(rows);
    store.set_filters(FilterPatch::default().year_max(Some(2020)));
    store.compute();

    let ids: Vec<&str> = store.bi().people.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["person:a", "person:c"]);
}

#[test]
fn test_compute_is_idempotent() {
    let mut store = ViewStore::default();
    store.import_rows(sample_rows());
    store.compute();
    let bi = store.bi().clone();
    let graph = store.graph().clone();

    store.compute();
    assert_eq!(store.bi(), &bi);
    assert_eq!(store.graph(), &graph);
}

#[test]
fn test_action_recompute_policies() {
    assert_eq!(Action::ImportRows(Vec::new()).recompute(), Recompute::Deferred);
    assert_eq!(
        Action::SetFilters(FilterPatch::default()).recompute(),
        Recompute::Deferred
    );
    assert_eq!(Action::SetView(ViewMode::People).recompute(), Recompute::Immediate);
    assert_eq!(Action::Compute.recompute(), Recompute::Immediate);
}

#[test]
fn test_dispatch_batches_until_compute() {
    let mut store = ViewStore::default();
    store.dispatch(Action::ImportRows(sample_rows()));
    store.dispatch(Action::SetFilters(FilterPatch::default().role("Director")));
    assert!(store.bi().is_empty());

    store.dispatch(Action::Compute);
    assert_eq!(store.bi().roles.len(), 3);
}

#[test]
fn test_config_seeds_view_and_filters() {
    let config = ViewConfig {
        default_mode: ViewMode::Orgs,
        role: "Treasurer".to_string(),
        year_min: None,
        year_max: None,
    };
    let mut store = ViewStore::new(&config);
    store.import_rows(sample_rows());
    store.compute();

    assert_eq!(store.view(), ViewMode::Orgs);
    assert_eq!(store.filters().role, "Treasurer");
    assert_eq!(store.graph().nodes.len(), 1);
    assert!(store.graph().links.is_empty());
}

#[test]
fn test_overlap_matrix_follows_last_compute() {
    let mut store = ViewStore::default();
    store.import_rows(sample_rows());
    store.compute();
    assert_eq!(store.overlap_matrix().matrix, vec![vec![0, 1], vec![1, 0]]);
}

#[test]
fn test_matching_nodes_uses_query() {
    let mut store = ViewStore::default();
    store.import_rows(sample_rows());
    store.compute();
    assert!(store.matching_nodes().is_empty());

    store.set_filters(FilterPatch::default().query("  ali "));
    let matches = store.matching_nodes();
    let hits: Vec<&str> = matches.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(hits, vec!["Alice Smith"]);
}

#[test]
fn test_network_index_from_store() {
    let mut store = ViewStore::default();
    store.import_rows(sample_rows());
    store.compute();

    let index = store.network_index();
    let neighbors = index.neighbors("person:alice@example.org").unwrap();
    assert_eq!(neighbors.len(), 2);
}

struct NameOnlyIdentity;

impl IdentityPolicy for NameOnlyIdentity {
    fn person_key(&self, name: &str, _email: Option<&str>) -> String {
        format!("person:{}", slugify(name))
    }

    fn org_key(&self, name: &str) -> String {
        format!("org:{}", slugify(name))
    }
}

#[test]
fn test_store_with_custom_identity() {
    let rows = vec![
        BoardRow::new("Pat Kim", "Hope").with_email("pat@one.org"),
        BoardRow::new("Pat Kim", "Water Now").with_email("pat@two.org"),
    ];
    let mut store = ViewStore::with_identity(&ViewConfig::default(), Box::new(NameOnlyIdentity));
    store.import_rows(rows);
    store.set_view(ViewMode::Orgs);

    assert_eq!(store.bi().people.len(), 1);
    assert_eq!(store.graph().links.len(), 1);
}

#[test]
fn test_empty_store_computes_empty_graph() {
    let mut store = ViewStore::default();
    store.compute();
    assert_eq!(store.freshness(), Freshness::Clean);
    assert!(store.bi().is_empty());
    assert!(store.graph().is_empty());
}

#[test]
fn test_graph_serializes_for_renderer() {
    let mut store = ViewStore::default();
    store.import_rows(sample_rows());
    store.compute();

    let value = serde_json::to_value(store.graph()).unwrap();
    assert_eq!(value["nodes"][0]["type"], "person");
    assert_eq!(value["links"][0]["weight"], 1);
}
