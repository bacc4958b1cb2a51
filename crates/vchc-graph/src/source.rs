use vchc_core::errors::VchcError;
use vchc_core::NodeId;

use crate::graph::{Graph, NodeKey};
use crate::node::Node;

/// Undirected input graph of the reduction together with the cover size `k`.
///
/// Every link is stored in both directions, so each undirected edge appears
/// once in the adjacency of each endpoint. `k` is carried as is; checking it
/// against the vertex count is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct SourceGraph {
    graph: Graph,
    k: usize,
}

impl SourceGraph {
    /// Creates an empty source graph with cover size `k`.
    pub fn new(k: usize) -> Self {
        Self {
            graph: Graph::new(),
            k,
        }
    }

    /// Rebuilds the graph under a new cover size, keeping vertices and edges.
    pub fn with_k(self, k: usize) -> Self {
        Self {
            graph: self.graph,
            k,
        }
    }

    /// Target cover size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Adds a vertex.
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<NodeId, VchcError> {
        self.graph.add_node(id)
    }

    /// Adds the undirected edge `{a, b}`.
    pub fn link_nodes<A, B>(&mut self, a: A, b: B) -> Result<(), VchcError>
    where
        A: NodeKey,
        B: NodeKey,
    {
        self.graph.link_nodes(a, b, false)
    }

    /// Returns the vertex registered under `id`.
    pub fn get_node(&self, id: &str) -> Result<&Node, VchcError> {
        self.graph.get_node(id)
    }

    /// Returns a snapshot of every vertex in insertion order.
    pub fn all_nodes(&self) -> Vec<Node> {
        self.graph.all_nodes()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.link_count() / 2
    }

    /// Each undirected edge once, oriented as first discovered.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (handle, node) in self.graph.entries() {
            for successor in node.successors() {
                if handle < *successor {
                    edges.push((handle, *successor));
                }
            }
        }
        edges
            .into_iter()
            .filter_map(|(a, b)| Some((self.graph.node(a).ok()?.id(), self.graph.node(b).ok()?.id())))
            .collect()
    }

    /// Read access to the underlying arena.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}
