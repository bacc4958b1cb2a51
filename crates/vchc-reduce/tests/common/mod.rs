#![allow(dead_code)]

use vchc_graph::{SourceGraph, TargetGraph};

/// Installs a test writer subscriber honouring `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `u-v, v-w, w-u, w-x` with `k = 2`.
pub fn example_source() -> SourceGraph {
    let mut graph = SourceGraph::new(2);
    for id in ["u", "v", "w", "x"] {
        graph.add_node(id).unwrap();
    }
    graph.link_nodes("u", "v").unwrap();
    graph.link_nodes("v", "w").unwrap();
    graph.link_nodes("w", "u").unwrap();
    graph.link_nodes("w", "x").unwrap();
    graph
}

/// Successor identifiers of the target node named `id`.
pub fn successors<'a>(target: &'a TargetGraph, id: &str) -> Vec<&'a str> {
    let node = target.get_node(id).unwrap();
    target.graph().successor_ids(node).unwrap()
}
