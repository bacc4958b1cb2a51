mod common;

use std::collections::BTreeSet;

use vchc_core::errors::ErrorKind;
use vchc_graph::EdgeKey;
use vchc_reduce::{reduce, ReductionSummary, Reducer};

use common::{example_source, init_tracing, successors};

#[test]
fn example_builds_one_component_per_edge() {
    init_tracing();
    let target = reduce(&example_source()).unwrap();

    let keys: BTreeSet<EdgeKey> = target
        .all_cover_testing_components()
        .iter()
        .map(|component| component.key())
        .collect();
    let expected: BTreeSet<EdgeKey> = [("u", "v"), ("v", "w"), ("w", "u"), ("w", "x")]
        .into_iter()
        .map(|(a, b)| EdgeKey::new(a, b))
        .collect();
    assert_eq!(keys, expected);
    assert_eq!(target.all_cover_testing_components().len(), 4);

    let selectors: Vec<_> = target.selector_nodes().iter().map(|node| node.id()).collect();
    assert_eq!(selectors, vec!["a1", "a2"]);
}

#[test]
fn gadgets_keep_the_first_discovered_orientation() {
    let target = reduce(&example_source()).unwrap();
    assert_eq!(
        target.get_cover_testing_component("w", "v").unwrap().endpoints(),
        ("v", "w")
    );
    assert_eq!(
        target.get_cover_testing_component("x", "w").unwrap().endpoints(),
        ("w", "x")
    );
}

#[test]
fn degree_three_vertex_is_threaded_in_adjacency_order() {
    let target = reduce(&example_source()).unwrap();

    assert_eq!(successors(&target, "wv6"), vec!["wu1"]);
    assert_eq!(successors(&target, "wu6"), vec!["wx1"]);
    assert_eq!(successors(&target, "wv1"), vec!["wv2", "a1", "a2"]);
    assert_eq!(successors(&target, "wx6"), vec!["xw4", "a1", "a2"]);
    assert_eq!(successors(&target, "wu1"), vec!["wu2"]);
}

#[test]
fn chain_entry_keeps_gadget_links_before_selector_links() {
    let target = reduce(&example_source()).unwrap();
    assert_eq!(successors(&target, "uv1"), vec!["uv2", "vu3", "a1", "a2"]);
    assert_eq!(successors(&target, "uv6"), vec!["vu4", "uw1"]);
    assert_eq!(successors(&target, "uw6"), vec!["wu4", "a1", "a2"]);
}

#[test]
fn degree_one_vertex_links_both_ends_to_every_selector() {
    let target = reduce(&example_source()).unwrap();
    assert_eq!(successors(&target, "xw1"), vec!["xw2", "a1", "a2"]);
    assert_eq!(successors(&target, "xw6"), vec!["a1", "a2"]);
}

#[test]
fn summary_counts_match_the_graph() {
    let (target, summary) = Reducer::default()
        .reduce_with_summary(&example_source())
        .unwrap();
    assert_eq!(
        summary,
        ReductionSummary {
            selectors: 2,
            components: 4,
            nodes: 50,
            links: 76,
            chain_links: 4,
            selector_links: 16,
            isolated_vertices: 0,
        }
    );
    assert_eq!(target.graph().len(), 50);
    assert_eq!(target.graph().link_count(), 76);
}

#[test]
fn isolated_vertex_contributes_nothing() {
    let mut source = example_source();
    source.add_node("y").unwrap();
    let (target, summary) = Reducer::default().reduce_with_summary(&source).unwrap();

    assert_eq!(summary.isolated_vertices, 1);
    assert_eq!(target.graph().len(), 50);
    assert!(target.graph().nodes().all(|node| !node.id().starts_with('y')));
    let err = target.get_cover_testing_component("y", "x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ComponentNotFound);
}

#[test]
fn zero_cover_size_builds_no_selectors() {
    let source = example_source().with_k(0);
    let (target, summary) = Reducer::default().reduce_with_summary(&source).unwrap();
    assert!(target.selector_ids().is_empty());
    assert_eq!(summary.selector_links, 0);
    assert_eq!(successors(&target, "xw6"), Vec::<&str>::new());
}

#[test]
fn prefix_colliding_vertex_ids_surface_as_duplicate_nodes() {
    let mut source = vchc_graph::SourceGraph::new(1);
    for id in ["1", "12", "11", "2"] {
        source.add_node(id).unwrap();
    }
    source.link_nodes("1", "12").unwrap();
    source.link_nodes("11", "2").unwrap();

    let err = reduce(&source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateNode);
}
