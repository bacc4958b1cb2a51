use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace};
use vchc_core::errors::VchcError;
use vchc_core::NodeId;
use vchc_graph::{
    gadget_node_id, Node, SourceGraph, TargetGraph, CHAIN_LEN, CROSS_LINKS, GADGET_SIZE,
};

use crate::config::ReductionConfig;
use crate::params::check_parameters;

/// Counts describing one reduction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionSummary {
    /// Selector nodes created.
    pub selectors: usize,
    /// Cover testing components created.
    pub components: usize,
    /// Nodes in the target graph.
    pub nodes: usize,
    /// Directed links in the target graph.
    pub links: usize,
    /// Links threading consecutive gadgets of one vertex.
    pub chain_links: usize,
    /// Links from gadget entry/exit nodes to selectors.
    pub selector_links: usize,
    /// Source vertices without incident edges.
    pub isolated_vertices: usize,
}

/// Builds the Hamiltonian circuit instance for a vertex cover instance.
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    config: ReductionConfig,
}

impl Reducer {
    /// Creates a reducer with the provided configuration.
    pub fn new(config: ReductionConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this reducer.
    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }

    /// Produces a freshly built target graph for `source`.
    pub fn reduce(&self, source: &SourceGraph) -> Result<TargetGraph, VchcError> {
        self.reduce_with_summary(source).map(|(target, _)| target)
    }

    /// Produces the target graph together with counts of what was built.
    ///
    /// Any error here means the source broke an identifier precondition (for
    /// example two vertex ids whose concatenations collide); the reducer never
    /// retries or patches around it.
    pub fn reduce_with_summary(
        &self,
        source: &SourceGraph,
    ) -> Result<(TargetGraph, ReductionSummary), VchcError> {
        if self.config.enforce_parameter_bounds {
            check_parameters(source)?;
        }
        let span = debug_span!(
            "reduce",
            k = source.k(),
            vertices = source.vertex_count(),
            edges = source.edge_count()
        );
        let _guard = span.enter();

        let mut target = TargetGraph::new();
        let mut summary = ReductionSummary::default();
        self.add_selectors(source.k(), &mut target)?;
        summary.selectors = target.selector_ids().len();

        let graph = source.graph();
        for vertex in graph.nodes() {
            let u = vertex.id();
            let successors = graph.successor_ids(vertex)?;
            for v in &successors {
                if target.component_exists(u, v) {
                    continue;
                }
                build_component(&mut target, u, v)?;
                summary.components += 1;
            }
            chain_vertex(&mut target, u, &successors, &mut summary)?;
        }

        summary.nodes = target.graph().len();
        summary.links = target.graph().link_count();
        debug!(
            components = summary.components,
            nodes = summary.nodes,
            links = summary.links,
            "reduction finished"
        );
        Ok((target, summary))
    }

    fn add_selectors(&self, k: usize, target: &mut TargetGraph) -> Result<(), VchcError> {
        for index in 1..=k {
            target.add_selector_node(Node::new(self.config.selector_id(index)))?;
        }
        Ok(())
    }
}

/// Reduces `source` with the default configuration.
pub fn reduce(source: &SourceGraph) -> Result<TargetGraph, VchcError> {
    Reducer::default().reduce(source)
}

fn build_component(target: &mut TargetGraph, u: &str, v: &str) -> Result<(), VchcError> {
    let nodes: [Node; GADGET_SIZE] = std::array::from_fn(|index| {
        if index < CHAIN_LEN {
            Node::new(gadget_node_id(u, v, index + 1))
        } else {
            Node::new(gadget_node_id(v, u, index - CHAIN_LEN + 1))
        }
    });
    let handles = *target.add_cover_testing_component(nodes, u, v)?.nodes();

    for pair in handles[..CHAIN_LEN].windows(2) {
        target.link_nodes(pair[0], pair[1], true)?;
    }
    for pair in handles[CHAIN_LEN..].windows(2) {
        target.link_nodes(pair[0], pair[1], true)?;
    }
    for (from, to) in CROSS_LINKS {
        target.link_nodes(handles[from], handles[to], true)?;
    }
    trace!(u, v, "cover testing component built");
    Ok(())
}

/// Threads the gadgets incident to `u` in adjacency order and attaches both
/// ends of the thread to every selector.
fn chain_vertex(
    target: &mut TargetGraph,
    u: &str,
    successors: &[&str],
    summary: &mut ReductionSummary,
) -> Result<(), VchcError> {
    match successors {
        [] => {
            trace!(u, "isolated vertex contributes nothing");
            summary.isolated_vertices += 1;
        }
        [only] => {
            let entry = chain_node(target, u, only, 1)?;
            let exit = chain_node(target, u, only, CHAIN_LEN)?;
            summary.selector_links += link_to_selectors(target, entry)?;
            summary.selector_links += link_to_selectors(target, exit)?;
        }
        _ => {
            let last = successors.len() - 2;
            for (index, pair) in successors.windows(2).enumerate() {
                let exit = chain_node(target, u, pair[0], CHAIN_LEN)?;
                let next_entry = chain_node(target, u, pair[1], 1)?;
                target.link_nodes(exit, next_entry, true)?;
                summary.chain_links += 1;
                if index == 0 {
                    let entry = chain_node(target, u, pair[0], 1)?;
                    summary.selector_links += link_to_selectors(target, entry)?;
                }
                if index == last {
                    let final_exit = chain_node(target, u, pair[1], CHAIN_LEN)?;
                    summary.selector_links += link_to_selectors(target, final_exit)?;
                }
            }
        }
    }
    Ok(())
}

fn chain_node(
    target: &TargetGraph,
    u: &str,
    v: &str,
    position: usize,
) -> Result<NodeId, VchcError> {
    target.graph().handle(&gadget_node_id(u, v, position))
}

fn link_to_selectors(target: &mut TargetGraph, from: NodeId) -> Result<usize, VchcError> {
    let selectors = target.selector_ids().to_vec();
    for selector in &selectors {
        target.link_nodes(from, *selector, true)?;
    }
    Ok(selectors.len())
}
