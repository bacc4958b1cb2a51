use std::collections::HashMap;

use vchc_core::errors::{codes, VchcError};
use vchc_core::NodeId;

use crate::node::{duplicate_edge, Node};

/// Anything that can be resolved to a node handle within a [`Graph`].
///
/// Implemented for string identifiers and for handles issued by the graph.
pub trait NodeKey {
    /// Resolves the key, failing with `node-not-found` when it is unknown.
    fn resolve(&self, graph: &Graph) -> Result<NodeId, VchcError>;
}

impl NodeKey for str {
    fn resolve(&self, graph: &Graph) -> Result<NodeId, VchcError> {
        graph.handle(self)
    }
}

impl NodeKey for String {
    fn resolve(&self, graph: &Graph) -> Result<NodeId, VchcError> {
        graph.handle(self)
    }
}

impl NodeKey for NodeId {
    fn resolve(&self, graph: &Graph) -> Result<NodeId, VchcError> {
        graph.node(*self).map(|_| *self)
    }
}

impl<T: NodeKey + ?Sized> NodeKey for &T {
    fn resolve(&self, graph: &Graph) -> Result<NodeId, VchcError> {
        (**self).resolve(graph)
    }
}

/// Arena of uniquely named nodes with directed adjacency.
///
/// Nodes are stored in insertion order and addressed by [`NodeId`] handles;
/// the identifier index maps names back to handles. Nodes are never removed,
/// so handles stay valid for the lifetime of the graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    links: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fresh node with the given identifier.
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<NodeId, VchcError> {
        self.insert_node(Node::new(id))
    }

    /// Inserts a prebuilt node.
    ///
    /// Any successors already recorded on `node` must be handles of this graph.
    pub fn insert_node(&mut self, mut node: Node) -> Result<NodeId, VchcError> {
        self.ensure_absent(node.id())?;
        let handle = NodeId::from_raw(self.nodes.len() as u32);
        for successor in node.successors() {
            if *successor != handle {
                self.node(*successor)?;
            }
        }
        node.reset_in_degree();
        let successors = node.successors().to_vec();
        self.index.insert(node.id().to_owned(), handle);
        self.nodes.push(node);
        for successor in successors {
            self.nodes[successor.index()].bump_in_degree();
            self.links += 1;
        }
        Ok(handle)
    }

    /// Returns the node registered under `id`.
    pub fn get_node(&self, id: &str) -> Result<&Node, VchcError> {
        let handle = self.handle(id)?;
        self.node(handle)
    }

    /// Returns the handle registered under `id`.
    pub fn handle(&self, id: &str) -> Result<NodeId, VchcError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| node_not_found().with_context("node", id))
    }

    /// Returns the node addressed by `handle`.
    pub fn node(&self, handle: NodeId) -> Result<&Node, VchcError> {
        self.nodes
            .get(handle.index())
            .ok_or_else(|| node_not_found().with_context("handle", handle.as_raw()))
    }

    /// Returns whether a node with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Links `a` to `b`, and `b` back to `a` unless `directed` is set.
    ///
    /// Both directions are checked before either is written, so a rejected
    /// call leaves the adjacency untouched.
    pub fn link_nodes<A, B>(&mut self, a: A, b: B, directed: bool) -> Result<(), VchcError>
    where
        A: NodeKey,
        B: NodeKey,
    {
        let from = a.resolve(self)?;
        let to = b.resolve(self)?;
        self.ensure_unlinked(from, to)?;
        if !directed {
            if from == to {
                return Err(duplicate_edge(self.nodes[from.index()].id(), to));
            }
            self.ensure_unlinked(to, from)?;
        }
        self.push_link(from, to)?;
        if !directed {
            self.push_link(to, from)?;
        }
        Ok(())
    }

    /// Returns a snapshot of every node in insertion order.
    pub fn all_nodes(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    /// Iterates over the stored nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Iterates over `(handle, node)` pairs in insertion order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId::from_raw(idx as u32), node))
    }

    /// Returns the identifiers of `node`'s successors in insertion order.
    pub fn successor_ids(&self, node: &Node) -> Result<Vec<&str>, VchcError> {
        node.successors()
            .iter()
            .map(|handle| self.node(*handle).map(Node::id))
            .collect()
    }

    /// Returns every directed link as `(from, to)` identifier pairs.
    pub fn links(&self) -> Vec<(&str, &str)> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.successors()
                    .iter()
                    .map(move |to| (node.id(), self.nodes[to.index()].id()))
            })
            .collect()
    }

    /// Returns the inbound degree of the resolved node.
    pub fn in_degree(&self, key: impl NodeKey) -> Result<usize, VchcError> {
        let handle = key.resolve(self)?;
        Ok(self.nodes[handle.index()].in_degree())
    }

    /// Returns the outbound degree of the resolved node.
    pub fn out_degree(&self, key: impl NodeKey) -> Result<usize, VchcError> {
        let handle = key.resolve(self)?;
        Ok(self.nodes[handle.index()].out_degree())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed links.
    pub fn link_count(&self) -> usize {
        self.links
    }

    fn ensure_absent(&self, id: &str) -> Result<(), VchcError> {
        if self.contains(id) {
            return Err(
                VchcError::graph(codes::DUPLICATE_NODE, "node already exists").with_context("node", id)
            );
        }
        Ok(())
    }

    fn ensure_unlinked(&self, from: NodeId, to: NodeId) -> Result<(), VchcError> {
        let source = &self.nodes[from.index()];
        if source.has_successor(to) {
            return Err(
                VchcError::graph(codes::DUPLICATE_EDGE, "successor already present")
                    .with_context("from", source.id())
                    .with_context("to", self.nodes[to.index()].id()),
            );
        }
        Ok(())
    }

    fn push_link(&mut self, from: NodeId, to: NodeId) -> Result<(), VchcError> {
        self.nodes[from.index()].add_successor(to)?;
        self.nodes[to.index()].bump_in_degree();
        self.links += 1;
        Ok(())
    }
}

pub(crate) fn node_not_found() -> VchcError {
    VchcError::graph(codes::NODE_NOT_FOUND, "node does not exist")
}
