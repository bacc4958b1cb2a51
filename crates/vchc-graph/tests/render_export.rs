use vchc_core::provenance::SchemaVersion;
use vchc_graph::{
    canonical_hash, render_to_bytes, render_to_json, Graph, Node, NodeRole, RenderGraph,
    SourceGraph, TargetGraph,
};

#[test]
fn source_export_lists_both_directions() {
    let mut graph = SourceGraph::new(1);
    graph.add_node("1").unwrap();
    graph.add_node("2").unwrap();
    graph.link_nodes("1", "2").unwrap();

    let render = RenderGraph::from_source(&graph, SchemaVersion::default());
    assert!(render.nodes.iter().all(|node| node.role == NodeRole::Vertex));
    assert_eq!(render.nodes[0].name, "1");
    assert_eq!(render.links.len(), 2);
    assert_eq!(render.links[1].source, "2");
    assert_eq!(render.links[1].target, "1");
}

#[test]
fn target_export_tags_roles() {
    let mut graph = TargetGraph::new();
    graph.add_selector_node(Node::new("a1")).unwrap();

    let render = RenderGraph::from_target(&graph, SchemaVersion::new(1, 2, 0));
    assert_eq!(render.nodes[0].role, NodeRole::Selector);

    let json = render_to_json(&render).unwrap();
    assert!(json.contains("\"role\": \"selector\""));
    assert!(json.contains("\"minor\": 2"));
    assert!(!render_to_bytes(&render).unwrap().is_empty());
}

#[test]
fn hash_ignores_insertion_order() {
    let mut first = Graph::new();
    first.add_node("a").unwrap();
    first.add_node("b").unwrap();
    first.link_nodes("a", "b", true).unwrap();

    let mut second = Graph::new();
    second.add_node("b").unwrap();
    second.add_node("a").unwrap();
    second.link_nodes("a", "b", true).unwrap();

    assert_eq!(canonical_hash(&first).unwrap(), canonical_hash(&second).unwrap());

    second.link_nodes("b", "a", true).unwrap();
    assert_ne!(canonical_hash(&first).unwrap(), canonical_hash(&second).unwrap());
}
