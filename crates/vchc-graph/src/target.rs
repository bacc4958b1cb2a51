use std::collections::{BTreeMap, HashSet};

use vchc_core::errors::{codes, VchcError};
use vchc_core::{ComponentId, NodeId};

use crate::graph::{Graph, NodeKey};
use crate::node::Node;

/// Number of nodes in each orientation chain of a gadget.
pub const CHAIN_LEN: usize = 6;

/// Number of nodes in a cover testing component.
pub const GADGET_SIZE: usize = 2 * CHAIN_LEN;

/// Directed links between the two chains of a gadget, as index pairs.
pub const CROSS_LINKS: [(usize, usize); 4] = [(0, 8), (2, 6), (3, 11), (5, 9)];

/// Identifier of the gadget node at `position` (1-based) of the `from → to` chain.
pub fn gadget_node_id(from: &str, to: &str, position: usize) -> String {
    format!("{from}{to}{position}")
}

/// Order independent key for an undirected source edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    low: String,
    high: String,
}

impl EdgeKey {
    /// Builds the key for `{u, v}`; `EdgeKey::new(u, v) == EdgeKey::new(v, u)`.
    pub fn new(u: &str, v: &str) -> Self {
        let (low, high) = if u <= v { (u, v) } else { (v, u) };
        Self {
            low: low.to_owned(),
            high: high.to_owned(),
        }
    }

    /// Lexicographically smaller endpoint.
    pub fn low(&self) -> &str {
        &self.low
    }

    /// Lexicographically larger endpoint.
    pub fn high(&self) -> &str {
        &self.high
    }
}

/// The twelve-node gadget built for one source edge.
///
/// Indices `0..6` hold the `{first}{second}` chain and `6..12` the
/// `{second}{first}` chain, where `first` is the endpoint the gadget was
/// registered with. Lookups by either endpoint order return the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverTestingComponent {
    first: String,
    second: String,
    nodes: [NodeId; GADGET_SIZE],
}

impl CoverTestingComponent {
    /// Endpoints in registration order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    /// Canonical key of the source edge.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.first, &self.second)
    }

    /// Node handles in creation order.
    pub fn nodes(&self) -> &[NodeId; GADGET_SIZE] {
        &self.nodes
    }

    /// Handle at `index`, if in range.
    pub fn node(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    /// The six-node chain named after `vertex`, i.e. `{vertex}{other}1..6`.
    pub fn chain_for(&self, vertex: &str) -> Option<&[NodeId]> {
        let offset = self.chain_offset(vertex)?;
        Some(&self.nodes[offset..offset + CHAIN_LEN])
    }

    /// First node of the chain named after `vertex`.
    pub fn entry_for(&self, vertex: &str) -> Option<NodeId> {
        self.chain_for(vertex).map(|chain| chain[0])
    }

    /// Last node of the chain named after `vertex`.
    pub fn exit_for(&self, vertex: &str) -> Option<NodeId> {
        self.chain_for(vertex).map(|chain| chain[CHAIN_LEN - 1])
    }

    fn chain_offset(&self, vertex: &str) -> Option<usize> {
        if vertex == self.first {
            Some(0)
        } else if vertex == self.second {
            Some(CHAIN_LEN)
        } else {
            None
        }
    }
}

/// Directed output graph of the reduction.
///
/// Besides the node arena it tracks the ordered selector nodes and one cover
/// testing component per undirected source edge.
#[derive(Debug, Clone, Default)]
pub struct TargetGraph {
    graph: Graph,
    selectors: Vec<NodeId>,
    components: Vec<CoverTestingComponent>,
    component_index: BTreeMap<EdgeKey, ComponentId>,
}

impl TargetGraph {
    /// Creates an empty target graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `node` and appends it to the selector list.
    pub fn add_selector_node(&mut self, node: Node) -> Result<NodeId, VchcError> {
        let handle = self.graph.insert_node(node)?;
        self.selectors.push(handle);
        Ok(handle)
    }

    /// Registers the gadget for `{u, v}` and inserts its nodes.
    ///
    /// Fails with `component-exists` if the pair is already registered and with
    /// `duplicate-node` if any gadget identifier collides. Nothing is inserted
    /// on failure.
    pub fn add_cover_testing_component(
        &mut self,
        component: [Node; GADGET_SIZE],
        u: &str,
        v: &str,
    ) -> Result<&CoverTestingComponent, VchcError> {
        if self.component_exists(u, v) {
            return Err(
                VchcError::component(codes::COMPONENT_EXISTS, "component already exists")
                    .with_context("u", u)
                    .with_context("v", v),
            );
        }
        let mut seen = HashSet::with_capacity(GADGET_SIZE);
        for node in &component {
            if self.graph.contains(node.id()) || !seen.insert(node.id()) {
                return Err(
                    VchcError::graph(codes::DUPLICATE_NODE, "node already exists")
                        .with_context("node", node.id())
                        .with_hint("source vertex identifiers must not be prefixes of each other"),
                );
            }
        }

        let mut handles = [NodeId::from_raw(0); GADGET_SIZE];
        for (slot, node) in handles.iter_mut().zip(component) {
            *slot = self.graph.insert_node(node)?;
        }
        let id = ComponentId::from_raw(self.components.len() as u32);
        self.component_index.insert(EdgeKey::new(u, v), id);
        self.components.push(CoverTestingComponent {
            first: u.to_owned(),
            second: v.to_owned(),
            nodes: handles,
        });
        Ok(&self.components[self.components.len() - 1])
    }

    /// Returns whether a gadget exists for `{u, v}` in either order.
    pub fn component_exists(&self, u: &str, v: &str) -> bool {
        self.component_index.contains_key(&EdgeKey::new(u, v))
    }

    /// Returns the gadget for `{u, v}` in either order.
    pub fn get_cover_testing_component(
        &self,
        u: &str,
        v: &str,
    ) -> Result<&CoverTestingComponent, VchcError> {
        self.component_index
            .get(&EdgeKey::new(u, v))
            .map(|id| &self.components[id.as_raw() as usize])
            .ok_or_else(|| {
                VchcError::component(codes::COMPONENT_NOT_FOUND, "component does not exist")
                    .with_context("u", u)
                    .with_context("v", v)
            })
    }

    /// All gadgets in registration order.
    pub fn all_cover_testing_components(&self) -> &[CoverTestingComponent] {
        &self.components
    }

    /// Selector handles in creation order.
    pub fn selector_ids(&self) -> &[NodeId] {
        &self.selectors
    }

    /// Selector nodes in creation order.
    pub fn selector_nodes(&self) -> Vec<&Node> {
        self.selectors
            .iter()
            .filter_map(|handle| self.graph.node(*handle).ok())
            .collect()
    }

    /// Returns whether `handle` is one of the selectors.
    pub fn is_selector(&self, handle: NodeId) -> bool {
        self.selectors.contains(&handle)
    }

    /// Adds a link between two nodes of the target graph.
    pub fn link_nodes<A, B>(&mut self, a: A, b: B, directed: bool) -> Result<(), VchcError>
    where
        A: NodeKey,
        B: NodeKey,
    {
        self.graph.link_nodes(a, b, directed)
    }

    /// Returns the node registered under `id`.
    pub fn get_node(&self, id: &str) -> Result<&Node, VchcError> {
        self.graph.get_node(id)
    }

    /// Returns a snapshot of every node in insertion order.
    pub fn all_nodes(&self) -> Vec<Node> {
        self.graph.all_nodes()
    }

    /// Read access to the underlying arena.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}
