use rand::seq::SliceRandom;
use vchc_core::errors::VchcError;
use vchc_core::rng::RngHandle;

use crate::source::SourceGraph;

/// Identifier used for the `index`-th generated vertex.
///
/// Identifiers share a prefix and a fixed width, so no identifier is a prefix
/// of another and gadget names derived from them never collide.
pub fn vertex_id(index: usize, n_vertices: usize) -> String {
    let width = n_vertices.saturating_sub(1).to_string().len();
    format!("v{index:0width$}")
}

/// Generates a source graph with `n_vertices` vertices and up to `edge_count`
/// distinct undirected edges chosen with deterministic randomness.
///
/// Edges are linked in sampled order, which fixes every adjacency order.
pub fn gen_random_source_graph(
    n_vertices: usize,
    edge_count: usize,
    k: usize,
    rng: &mut RngHandle,
) -> Result<SourceGraph, VchcError> {
    let mut graph = SourceGraph::new(k);
    let ids: Vec<String> = (0..n_vertices)
        .map(|index| vertex_id(index, n_vertices))
        .collect();
    for id in &ids {
        graph.add_node(id.as_str())?;
    }

    let mut pairs: Vec<(usize, usize)> = (0..n_vertices)
        .flat_map(|a| ((a + 1)..n_vertices).map(move |b| (a, b)))
        .collect();
    pairs.shuffle(rng);
    pairs.truncate(edge_count);
    for (a, b) in pairs {
        graph.link_nodes(ids[a].as_str(), ids[b].as_str())?;
    }
    Ok(graph)
}
