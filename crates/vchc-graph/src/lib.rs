#![deny(missing_docs)]

//! Arena backed graphs for the vertex cover to Hamiltonian circuit reduction.
//!
//! [`Graph`] is the shared container: named nodes, insertion ordered
//! adjacency, directed or symmetric linking. [`SourceGraph`] wraps it with the
//! cover size and symmetric-only edges; [`TargetGraph`] wraps it with the
//! selector list and the per-edge cover testing components.

mod generators;
mod graph;
mod hash;
mod node;
mod serialization;
mod source;
mod target;

pub use generators::{gen_random_source_graph, vertex_id};
pub use graph::{Graph, NodeKey};
pub use hash::canonical_hash;
pub use node::Node;
pub use serialization::{
    render_to_bytes, render_to_json, NodeRole, RenderGraph, RenderLink, RenderNode,
};
pub use source::SourceGraph;
pub use target::{
    gadget_node_id, CoverTestingComponent, EdgeKey, TargetGraph, CHAIN_LEN, CROSS_LINKS,
    GADGET_SIZE,
};
